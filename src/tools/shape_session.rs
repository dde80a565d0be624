use egui::{Pos2, Rect, Vec2};

use crate::brush::BrushState;
use crate::error::Result;
use crate::geometry::Affine;
use crate::layer::Layer;
use crate::shape::{SHAPE_EXTENT, ShapeGenerator, ShapeOutline};
use crate::tools::StampKind;
use crate::transform::{MIN_SHAPE_SCALE, TransformState};

/// Side of the square edit surface a stamp is placed on.
pub const EDIT_SURFACE_EXTENT: f32 = SHAPE_EXTENT;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The outline was rasterized into the bitmap
    Committed,
    /// The outline was discarded, the bitmap is untouched
    Cancelled,
}

#[derive(Debug, Clone)]
struct Editing {
    stamp: StampKind,
    outline: ShapeOutline,
    transform: TransformState,
    /// Surface center before any pan
    home: Pos2,
}

impl Editing {
    fn center(&self) -> Pos2 {
        self.home + self.transform.translation
    }

    /// Maps the local outline onto the canvas. Rotation is only previewed,
    /// it is not part of the committed placement.
    fn commit_transform(&self) -> Affine {
        let scale = self.transform.scale;
        let offset = self.center().to_vec2() - Vec2::splat(SHAPE_EXTENT / 2.0 * scale);
        Affine::scale(scale).then(Affine::translation(offset))
    }

    fn overlay_transform(&self) -> Affine {
        Affine::translation(-Vec2::splat(SHAPE_EXTENT / 2.0))
            .then(self.transform.overlay_matrix())
            .then(Affine::translation(self.center().to_vec2()))
    }
}

#[derive(Debug, Clone, Default)]
enum SessionState {
    #[default]
    Inactive,
    Editing(Editing),
}

/// Interactive placement of one stamp outline, from tool selection until it
/// is committed to the bitmap or cancelled.
#[derive(Debug, Clone)]
pub struct ShapeSession {
    state: SessionState,
    generator: ShapeGenerator,
    min_scale: f32,
}

impl Default for ShapeSession {
    fn default() -> Self {
        Self::new(ShapeGenerator::default(), MIN_SHAPE_SCALE)
    }
}

impl ShapeSession {
    pub fn new(generator: ShapeGenerator, min_scale: f32) -> Self {
        Self {
            state: SessionState::Inactive,
            generator,
            min_scale,
        }
    }

    /// Starts editing a fresh outline whose surface is centered on `home`.
    /// Any session already in progress is replaced and the transform is reset.
    pub fn begin(&mut self, stamp: StampKind, brush: &BrushState, home: Pos2) {
        let surface = Rect::from_min_size(Pos2::ZERO, Vec2::splat(EDIT_SURFACE_EXTENT));
        let outline = self
            .generator
            .generate(stamp, brush.color(), brush.width(), surface);
        self.state = SessionState::Editing(Editing {
            stamp,
            outline,
            transform: TransformState::IDENTITY,
            home,
        });
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, SessionState::Editing(_))
    }

    pub fn stamp(&self) -> Option<StampKind> {
        self.editing().map(|editing| editing.stamp)
    }

    pub fn outline(&self) -> Option<&ShapeOutline> {
        self.editing().map(|editing| &editing.outline)
    }

    pub fn transform(&self) -> Option<TransformState> {
        self.editing().map(|editing| editing.transform)
    }

    pub fn surface_center(&self) -> Option<Pos2> {
        self.editing().map(Editing::center)
    }

    /// Returns `false` when there is no session to apply the gesture to.
    pub fn pinch(&mut self, scale: f32) -> bool {
        let min_scale = self.min_scale;
        self.update(|t| t.with_pinch(scale, min_scale))
    }

    pub fn rotate(&mut self, radians: f32) -> bool {
        self.update(|t| t.with_rotation(radians))
    }

    pub fn pan(&mut self, translation: Vec2) -> bool {
        self.update(|t| t.with_pan(translation))
    }

    /// The outline as it should be drawn over the canvas, including rotation.
    pub fn overlay(&self) -> Option<ShapeOutline> {
        let editing = self.editing()?;
        Some(ShapeOutline {
            path: editing.outline.path.transformed(&editing.overlay_transform()),
            stroke_color: editing.outline.stroke_color,
            stroke_width: editing.outline.stroke_width * editing.transform.scale,
        })
    }

    /// Strokes the placed outline into `scratch` with the current brush and
    /// merges it into `bitmap`. Without an outline this is a cancel.
    pub fn commit(
        &mut self,
        brush: &BrushState,
        scratch: &mut Layer,
        bitmap: &mut Layer,
    ) -> Result<SessionOutcome> {
        let SessionState::Editing(editing) = std::mem::take(&mut self.state) else {
            return Ok(SessionOutcome::Cancelled);
        };

        let path = editing.outline.path.transformed(&editing.commit_transform());
        let width = brush.width() * editing.transform.scale;
        let stroked = scratch.stroke_path(&path, width, brush.color());
        let result = stroked.and_then(|()| scratch.composite_onto(bitmap, brush.opacity()));
        scratch.clear();

        result.map(|()| SessionOutcome::Committed)
    }

    /// Drops the outline. Returns `false` if nothing was being edited.
    pub fn cancel(&mut self) -> bool {
        let was_editing = self.is_editing();
        self.state = SessionState::Inactive;
        was_editing
    }

    fn editing(&self) -> Option<&Editing> {
        match &self.state {
            SessionState::Editing(editing) => Some(editing),
            SessionState::Inactive => None,
        }
    }

    fn update(&mut self, gesture: impl FnOnce(TransformState) -> TransformState) -> bool {
        match &mut self.state {
            SessionState::Editing(editing) => {
                editing.transform = gesture(editing.transform);
                true
            }
            SessionState::Inactive => false,
        }
    }
}
