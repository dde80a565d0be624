use egui::{Pos2, Vec2};

/// 2D affine transform.
///
/// Maps `(x, y)` to `(a*x + c*y + tx, b*x + d*y + ty)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn translation(offset: Vec2) -> Self {
        Self {
            tx: offset.x,
            ty: offset.y,
            ..Self::IDENTITY
        }
    }

    pub fn scale(factor: f32) -> Self {
        Self {
            a: factor,
            d: factor,
            ..Self::IDENTITY
        }
    }

    /// Rotation by `radians`, clockwise on screen since y points down.
    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Applies `self` first, then `next`.
    pub fn then(self, next: Affine) -> Affine {
        Affine {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
            tx: next.a * self.tx + next.c * self.ty + next.tx,
            ty: next.b * self.tx + next.d * self.ty + next.ty,
        }
    }

    pub fn apply(&self, p: Pos2) -> Pos2 {
        Pos2::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Pos2, b: Pos2) {
        assert!((a - b).length() < 1e-4, "{a:?} != {b:?}");
    }

    #[test]
    fn test_scale_then_translate() {
        let m = Affine::scale(2.0).then(Affine::translation(Vec2::new(10.0, 20.0)));
        assert_close(m.apply(Pos2::new(1.0, 1.0)), Pos2::new(12.0, 22.0));
    }

    #[test]
    fn test_translate_then_scale() {
        let m = Affine::translation(Vec2::new(10.0, 20.0)).then(Affine::scale(2.0));
        assert_close(m.apply(Pos2::new(1.0, 1.0)), Pos2::new(22.0, 42.0));
    }

    #[test]
    fn test_quarter_rotation() {
        let m = Affine::rotation(std::f32::consts::FRAC_PI_2);
        assert_close(m.apply(Pos2::new(1.0, 0.0)), Pos2::new(0.0, 1.0));
        assert_close(m.apply(Pos2::new(0.0, 1.0)), Pos2::new(-1.0, 0.0));
    }

    #[test]
    fn test_identity_is_neutral() {
        let m = Affine::rotation(0.7).then(Affine::scale(3.0));
        assert_eq!(m.then(Affine::IDENTITY), m);
        assert_eq!(Affine::IDENTITY.then(m), m);
    }
}
