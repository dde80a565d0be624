use egui::{Color32, Pos2, Rect};
use image::{Rgba, RgbaImage, imageops};
use std::fmt;

use crate::error::{DrawError, Result};
use crate::geometry::distance_to_segment;
use crate::shape::ShapePath;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// An RGBA raster buffer. Both the persistent bitmap and the scratch layer
/// are layers of the same size.
#[derive(Clone, PartialEq)]
pub struct Layer {
    image: RgbaImage,
}

// Only the size is interesting when debugging, not every pixel
impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}

impl Layer {
    /// Creates a fully transparent layer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    pub fn is_blank(&self) -> bool {
        self.image.pixels().all(|p| p[3] == 0)
    }

    pub fn clear(&mut self) {
        self.image.pixels_mut().for_each(|p| *p = TRANSPARENT);
    }

    /// Copy of this layer at a new size. Pixels stay anchored at the top-left
    /// corner, anything outside the new bounds is cropped.
    pub fn resized(&self, width: u32, height: u32) -> Self {
        let mut layer = Self::new(width, height);
        imageops::replace(&mut layer.image, &self.image, 0, 0);
        layer
    }

    /// Strokes a round-capped segment, blended over the current content.
    /// `from == to` paints a round dot.
    pub fn stroke_segment(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) -> Result<()> {
        self.ensure_drawable()?;
        let half_width = width / 2.0;
        let bounds = Rect::from_two_pos(from, to).expand(half_width + 1.0);
        self.paint_coverage(bounds, half_width, color, |p| distance_to_segment(p, from, to));
        Ok(())
    }

    /// Strokes every edge of `path` with round caps and joins.
    pub fn stroke_path(&mut self, path: &ShapePath, width: f32, color: Color32) -> Result<()> {
        self.ensure_drawable()?;
        let edges: Vec<(Pos2, Pos2)> = match path.points() {
            [] => return Ok(()),
            [single] => vec![(*single, *single)],
            _ => path.edges().collect(),
        };

        let half_width = width / 2.0;
        let bounds = path.bounds().expand(half_width + 1.0);
        self.paint_coverage(bounds, half_width, color, |p| {
            edges
                .iter()
                .map(|&(a, b)| distance_to_segment(p, a, b))
                .fold(f32::INFINITY, f32::min)
        });
        Ok(())
    }

    /// Blends this layer over `target` with normal blending. The target keeps
    /// full opacity, this layer's pixels are weighted by `opacity`.
    pub fn composite_onto(&self, target: &mut Layer, opacity: f32) -> Result<()> {
        target.ensure_drawable()?;
        if self.size() != target.size() {
            return Err(DrawError::SizeMismatch {
                expected: target.size(),
                actual: self.size(),
            });
        }
        for (dst, src) in target.image.pixels_mut().zip(self.image.pixels()) {
            *dst = blend_over(*dst, *src, opacity);
        }
        Ok(())
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        let (width, height) = self.size();
        egui::ColorImage::from_rgba_unmultiplied([width as usize, height as usize], self.image.as_raw())
    }

    fn ensure_drawable(&self) -> Result<()> {
        let (width, height) = self.size();
        if width == 0 || height == 0 {
            return Err(DrawError::EmptySurface { width, height });
        }
        Ok(())
    }

    /// Paints `color` into every pixel of `bounds` whose center lies within
    /// `half_width` of the shape described by `distance`, with a one pixel
    /// anti-aliased fringe.
    fn paint_coverage(
        &mut self,
        bounds: Rect,
        half_width: f32,
        color: Color32,
        distance: impl Fn(Pos2) -> f32,
    ) {
        let (width, height) = self.size();
        // negative and NaN coordinates saturate to 0
        let x0 = bounds.min.x.floor().max(0.0) as u32;
        let y0 = bounds.min.y.floor().max(0.0) as u32;
        let x1 = (bounds.max.x.ceil().min(width as f32)) as u32;
        let y1 = (bounds.max.y.ceil().min(height as f32)) as u32;

        let ink = Rgba(color.to_srgba_unmultiplied());
        for y in y0..y1 {
            for x in x0..x1 {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let coverage = (half_width + 0.5 - distance(center)).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }
                let pixel = self.image.get_pixel_mut(x, y);
                *pixel = blend_over(*pixel, ink, coverage);
            }
        }
    }
}

/// Straight-alpha "over" of `top` onto `base`, with `top`'s alpha scaled by
/// `opacity`.
pub(crate) fn blend_over(base: Rgba<u8>, top: Rgba<u8>, opacity: f32) -> Rgba<u8> {
    let top_a = (top[3] as f32 / 255.0) * opacity.clamp(0.0, 1.0);
    if top_a <= 0.0 {
        return base;
    }
    if top_a >= 1.0 {
        return top;
    }

    let base_a = base[3] as f32 / 255.0;
    let out_a = top_a + base_a * (1.0 - top_a);
    if out_a <= 0.0 {
        return TRANSPARENT;
    }

    let channel = |i: usize| {
        let mixed = (top[i] as f32 * top_a + base[i] as f32 * base_a * (1.0 - top_a)) / out_a;
        mixed.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}
