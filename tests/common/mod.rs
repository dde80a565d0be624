#![allow(dead_code)]

use drawpad::Layer;

/// Inclusive bounding box `(min_x, min_y, max_x, max_y)` of all non-transparent pixels.
pub fn painted_bounds(layer: &Layer) -> Option<(u32, u32, u32, u32)> {
    layer
        .image()
        .enumerate_pixels()
        .filter(|(_, _, p)| p[3] > 0)
        .fold(None, |bounds, (x, y, _)| match bounds {
            None => Some((x, y, x, y)),
            Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
        })
}

/// Number of 4-connected groups of non-transparent pixels.
pub fn mark_count(layer: &Layer) -> usize {
    let (width, height) = layer.size();
    let painted = |x: u32, y: u32| layer.pixel(x, y).is_some_and(|p| p[3] > 0);
    let mut seen = vec![false; (width * height) as usize];
    let mut marks = 0;

    for start_y in 0..height {
        for start_x in 0..width {
            let index = (start_y * width + start_x) as usize;
            if seen[index] || !painted(start_x, start_y) {
                continue;
            }
            marks += 1;
            seen[index] = true;
            let mut stack = vec![(start_x, start_y)];
            while let Some((x, y)) = stack.pop() {
                let neighbours = [
                    (x.wrapping_sub(1), y),
                    (x + 1, y),
                    (x, y.wrapping_sub(1)),
                    (x, y + 1),
                ];
                for (nx, ny) in neighbours {
                    if nx >= width || ny >= height {
                        continue;
                    }
                    let n = (ny * width + nx) as usize;
                    if !seen[n] && painted(nx, ny) {
                        seen[n] = true;
                        stack.push((nx, ny));
                    }
                }
            }
        }
    }
    marks
}

/// Painted pixels in row `y` between `x0` (inclusive) and `x1` (exclusive).
pub fn painted_in_row(layer: &Layer, y: u32, x0: u32, x1: u32) -> usize {
    (x0..x1)
        .filter(|&x| layer.pixel(x, y).is_some_and(|p| p[3] > 0))
        .count()
}
