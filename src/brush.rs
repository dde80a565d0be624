use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{DrawError, Result};

pub const DEFAULT_BRUSH_WIDTH: f32 = 10.0;
pub const DEFAULT_BRUSH_OPACITY: f32 = 1.0;

/// Width, opacity and color used for the next stroke or shape commit.
///
/// Invariants: `width > 0` and `0 <= opacity <= 1`. The setters reject
/// values that would break them and keep the previous value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushState {
    width: f32,
    opacity: f32,
    color: Color32,
}

impl Default for BrushState {
    fn default() -> Self {
        Self {
            width: DEFAULT_BRUSH_WIDTH,
            opacity: DEFAULT_BRUSH_OPACITY,
            color: Color32::BLACK,
        }
    }
}

impl BrushState {
    pub fn new(width: f32, opacity: f32, color: Color32) -> Result<Self> {
        let mut brush = Self {
            color,
            ..Self::default()
        };
        brush.set_width(width)?;
        brush.set_opacity(opacity)?;
        Ok(brush)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_width(&mut self, width: f32) -> Result<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(DrawError::InvalidWidth(width));
        }
        self.width = width;
        Ok(())
    }

    pub fn set_opacity(&mut self, opacity: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(DrawError::InvalidOpacity(opacity));
        }
        self.opacity = opacity;
        Ok(())
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    /// Whether a deserialized value still honours the invariants.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.width > 0.0 && (0.0..=1.0).contains(&self.opacity)
    }
}

/// Resolved color, width and opacity for one rasterization step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ink {
    pub color: Color32,
    pub width: f32,
    pub opacity: f32,
}

impl Ink {
    /// Ink the brush tool paints with.
    pub fn from_brush(brush: &BrushState) -> Self {
        Self {
            color: brush.color(),
            width: brush.width(),
            opacity: brush.opacity(),
        }
    }

    /// The eraser paints opaque white at the brush width.
    pub fn eraser(brush: &BrushState) -> Self {
        Self {
            color: Color32::WHITE,
            width: brush.width(),
            opacity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_width() {
        let mut brush = BrushState::default();
        assert_eq!(brush.set_width(0.0), Err(DrawError::InvalidWidth(0.0)));
        assert!(brush.set_width(-3.0).is_err());
        assert!(brush.set_width(f32::NAN).is_err());
        assert_eq!(brush.width(), DEFAULT_BRUSH_WIDTH);

        brush.set_width(25.0).unwrap();
        assert_eq!(brush.width(), 25.0);
    }

    #[test]
    fn test_rejects_invalid_opacity() {
        let mut brush = BrushState::default();
        assert!(brush.set_opacity(1.5).is_err());
        assert!(brush.set_opacity(-0.1).is_err());
        assert!(brush.set_opacity(f32::NAN).is_err());
        assert_eq!(brush.opacity(), DEFAULT_BRUSH_OPACITY);

        brush.set_opacity(0.0).unwrap();
        assert_eq!(brush.opacity(), 0.0);
    }

    #[test]
    fn test_eraser_ink_ignores_brush_color_and_opacity() {
        let brush = BrushState::new(8.0, 0.3, Color32::RED).unwrap();
        let ink = Ink::eraser(&brush);
        assert_eq!(ink.color, Color32::WHITE);
        assert_eq!(ink.opacity, 1.0);
        assert_eq!(ink.width, 8.0);
    }
}
