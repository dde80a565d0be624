use egui::Pos2;

use crate::brush::{BrushState, Ink};
use crate::error::Result;
use crate::layer::Layer;

/// Where the settings preview dot is drawn.
pub const PREVIEW_POINT: Pos2 = Pos2::new(30.0, 30.0);

/// Freehand drawing across one pointer press.
///
/// Segments land in the scratch layer while the pointer moves. The bitmap is
/// only touched when the pointer is released.
#[derive(Debug, Clone, Default)]
pub struct StrokeRasterizer {
    // Last pointer position seen, with or without a press
    anchor: Option<Pos2>,
    pressed: bool,
    moved: bool,
}

impl StrokeRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        self.pressed
    }

    pub fn begin(&mut self, point: Pos2) {
        self.anchor = Some(point);
        self.pressed = true;
        self.moved = false;
    }

    /// Extends the stroke to `point`. Returns whether the scratch layer was
    /// painted; a move without a press only records the position.
    pub fn move_to(&mut self, point: Pos2, scratch: &mut Layer, ink: Ink) -> Result<bool> {
        let previous = self.anchor.replace(point);
        let Some(anchor) = previous.filter(|_| self.pressed) else {
            return Ok(false);
        };
        self.moved = true;
        scratch.stroke_segment(anchor, point, ink.width, ink.color)?;
        Ok(true)
    }

    /// Finishes the stroke and merges the scratch layer into `bitmap`.
    ///
    /// A press without movement still leaves a dot at the press point, not at
    /// the release point. The scratch layer is cleared even when
    /// rasterization fails.
    pub fn end(&mut self, _point: Pos2, scratch: &mut Layer, bitmap: &mut Layer, ink: Ink) -> Result<()> {
        if !std::mem::take(&mut self.pressed) {
            return Ok(());
        }
        let moved = std::mem::take(&mut self.moved);
        let Some(anchor) = self.anchor.take() else {
            return Ok(());
        };

        let dot = if moved {
            Ok(())
        } else {
            scratch.stroke_segment(anchor, anchor, ink.width, ink.color)
        };
        let result = dot.and_then(|()| scratch.composite_onto(bitmap, ink.opacity));

        scratch.clear();
        result
    }

    /// Abandons the stroke in progress without merging it.
    pub fn abort(&mut self, scratch: &mut Layer) {
        self.anchor = None;
        self.pressed = false;
        self.moved = false;
        scratch.clear();
    }
}

/// Renders the single dot the settings panel shows for `brush`.
pub fn brush_preview(brush: &BrushState, size: u32) -> Result<Layer> {
    let mut scratch = Layer::new(size, size);
    let mut preview = Layer::new(size, size);
    let mut rasterizer = StrokeRasterizer::new();
    rasterizer.begin(PREVIEW_POINT);
    rasterizer.end(PREVIEW_POINT, &mut scratch, &mut preview, Ink::from_brush(brush))?;
    Ok(preview)
}
