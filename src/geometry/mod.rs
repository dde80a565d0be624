pub mod affine;

pub use affine::Affine;

use egui::{Pos2, Rect};

/// Distance from `p` to the segment `a`-`b`.
///
/// A zero-length segment degenerates to the distance from `p` to `a`.
pub fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq <= f32::EPSILON {
        return (p - a).length();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length()
}

/// Smallest rectangle containing every point, or `Rect::NOTHING` when empty.
pub fn bounds_of(points: &[Pos2]) -> Rect {
    points.iter().fold(Rect::NOTHING, |rect, &p| rect.union(Rect::from_min_max(p, p)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_segment_interior_and_caps() {
        let a = Pos2::new(0.0, 0.0);
        let b = Pos2::new(10.0, 0.0);
        assert!((distance_to_segment(Pos2::new(5.0, 3.0), a, b) - 3.0).abs() < 1e-5);
        // beyond the end caps the distance is radial
        assert!((distance_to_segment(Pos2::new(13.0, 4.0), a, b) - 5.0).abs() < 1e-5);
        assert!((distance_to_segment(Pos2::new(-3.0, -4.0), a, b) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_distance_to_degenerate_segment() {
        let a = Pos2::new(2.0, 2.0);
        assert!((distance_to_segment(Pos2::new(5.0, 6.0), a, a) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_bounds_of_points() {
        let rect = bounds_of(&[Pos2::new(3.0, 7.0), Pos2::new(-1.0, 2.0), Pos2::new(5.0, 4.0)]);
        assert_eq!(rect, Rect::from_min_max(Pos2::new(-1.0, 2.0), Pos2::new(5.0, 7.0)));
        assert_eq!(bounds_of(&[]), Rect::NOTHING);
    }
}
