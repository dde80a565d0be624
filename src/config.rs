use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::brush::{BrushState, DEFAULT_BRUSH_OPACITY, DEFAULT_BRUSH_WIDTH};
use crate::error::ConfigError;
use crate::palette::{ColorPalette, Palette};
use crate::shape::DEFAULT_ELLIPSE_SEGMENTS;
use crate::transform::MIN_SHAPE_SCALE;

/// Startup settings for the canvas.
///
/// Missing fields fall back to their defaults, so a config file only needs
/// the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub brush_width: f32,
    pub brush_opacity: f32,
    /// Index into the color palette
    pub color_index: usize,
    pub min_shape_scale: f32,
    pub ellipse_segments: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: 1024,
            canvas_height: 768,
            brush_width: DEFAULT_BRUSH_WIDTH,
            brush_opacity: DEFAULT_BRUSH_OPACITY,
            color_index: 0,
            min_shape_scale: MIN_SHAPE_SCALE,
            ellipse_segments: DEFAULT_ELLIPSE_SEGMENTS,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.brush().map_err(|err| ConfigError::Invalid {
            field: "brush",
            reason: err.to_string(),
        })?;
        if self.color_index >= ColorPalette.count() {
            return Err(ConfigError::Invalid {
                field: "color_index",
                reason: format!("must be below {}", ColorPalette.count()),
            });
        }
        if !self.min_shape_scale.is_finite() || self.min_shape_scale <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "min_shape_scale",
                reason: "must be a positive number".to_owned(),
            });
        }
        Ok(())
    }

    /// Initial brush described by this config.
    pub fn brush(&self) -> crate::Result<BrushState> {
        let color = ColorPalette
            .get(self.color_index)
            .map(|entry| entry.color)
            .unwrap_or(egui::Color32::BLACK);
        BrushState::new(self.brush_width, self.brush_opacity, color)
    }
}
