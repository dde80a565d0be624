mod shape_session;
mod stroke_tool;

pub use shape_session::{EDIT_SURFACE_EXTENT, SessionOutcome, ShapeSession};
pub use stroke_tool::{PREVIEW_POINT, StrokeRasterizer, brush_preview};

/// Every tool the canvas can have active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    #[default]
    Brush,
    Eraser,
    RectangleStamp,
    TriangleStamp,
    EllipseStamp,
}

/// The tools that place a shape outline instead of drawing freehand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StampKind {
    Rectangle,
    Triangle,
    Ellipse,
}

impl ToolKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Brush => "Brush",
            Self::Eraser => "Eraser",
            Self::RectangleStamp => "RectangleStamp",
            Self::TriangleStamp => "TriangleStamp",
            Self::EllipseStamp => "EllipseStamp",
        }
    }

    pub fn stamp(self) -> Option<StampKind> {
        match self {
            Self::Brush | Self::Eraser => None,
            Self::RectangleStamp => Some(StampKind::Rectangle),
            Self::TriangleStamp => Some(StampKind::Triangle),
            Self::EllipseStamp => Some(StampKind::Ellipse),
        }
    }

    pub fn is_stamp(self) -> bool {
        self.stamp().is_some()
    }

    /// Stamps are placed with gestures and never draw from raw pointer input.
    pub fn uses_pointer_drawing(self) -> bool {
        !self.is_stamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_stamps_map_to_stamp_kinds() {
        assert_eq!(ToolKind::Brush.stamp(), None);
        assert_eq!(ToolKind::Eraser.stamp(), None);
        assert_eq!(ToolKind::RectangleStamp.stamp(), Some(StampKind::Rectangle));
        assert_eq!(ToolKind::TriangleStamp.stamp(), Some(StampKind::Triangle));
        assert_eq!(ToolKind::EllipseStamp.stamp(), Some(StampKind::Ellipse));
        assert!(ToolKind::Eraser.uses_pointer_drawing());
        assert!(!ToolKind::EllipseStamp.uses_pointer_drawing());
    }
}
