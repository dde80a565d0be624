#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layer;
pub mod palette;
pub mod panels;
pub mod shape;
pub mod texture_manager;
pub mod tools;
pub mod transform;

pub use app::DrawPadApp;
pub use brush::{BrushState, Ink};
pub use canvas::{CanvasController, Panel};
pub use config::Config;
pub use error::{ConfigError, DrawError, Result};
pub use input::{CanvasEvent, InputHandler};
pub use layer::Layer;
pub use palette::{ColorPalette, Palette, ToolPalette};
pub use shape::{ShapeGenerator, ShapeOutline, ShapePath};
pub use tools::{SessionOutcome, ShapeSession, StampKind, StrokeRasterizer, ToolKind};
pub use transform::TransformState;
