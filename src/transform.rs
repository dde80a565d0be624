use egui::Vec2;

use crate::geometry::Affine;

/// Smallest scale a pinch can shrink a stamp to.
pub const MIN_SHAPE_SCALE: f32 = 0.1;

/// Scale, rotation and translation of the stamp being edited.
///
/// Each gesture reports its value relative to the start of that gesture, so
/// updates overwrite the matching component instead of accumulating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    /// Uniform scale factor (1.0 = original size)
    pub scale: f32,
    /// Rotation in radians
    pub rotation: f32,
    /// Offset of the edit surface center from its home position
    pub translation: Vec2,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformState {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation: 0.0,
        translation: Vec2::ZERO,
    };

    pub fn with_pinch(self, scale: f32, min_scale: f32) -> Self {
        if !scale.is_finite() {
            return self;
        }
        Self {
            scale: scale.max(min_scale),
            ..self
        }
    }

    pub fn with_rotation(self, radians: f32) -> Self {
        if !radians.is_finite() {
            return self;
        }
        Self {
            rotation: radians,
            ..self
        }
    }

    pub fn with_pan(self, translation: Vec2) -> Self {
        if !translation.is_finite() {
            return self;
        }
        Self {
            translation,
            ..self
        }
    }

    /// Rotation composed with scale, used to preview the stamp about its center.
    pub fn overlay_matrix(&self) -> Affine {
        Affine::scale(self.scale).then(Affine::rotation(self.rotation))
    }
}
