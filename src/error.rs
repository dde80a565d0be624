use thiserror::Error;

/// Errors raised while rasterizing or updating brush settings.
///
/// None of these are fatal: the canvas controller logs them and leaves the
/// bitmap as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    /// The layer has no pixels to draw into
    #[error("drawing surface is empty ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },

    /// Two layers that must be composited have different sizes
    #[error("layer size mismatch: expected {expected:?}, got {actual:?}")]
    SizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("brush width must be a positive number, got {0}")]
    InvalidWidth(f32),

    #[error("brush opacity must be within [0, 1], got {0}")]
    InvalidOpacity(f32),
}

/// Errors raised while loading a [`crate::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type Result<T, E = DrawError> = std::result::Result<T, E>;
