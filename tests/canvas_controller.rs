mod common;

use common::mark_count;
use drawpad::{CanvasController, CanvasEvent, DrawError, Panel, SessionOutcome, ToolKind};
use egui::{Pos2, Vec2};

/// Canvas with one horizontal black stroke across the middle.
fn canvas_with_stroke() -> CanvasController {
    let mut canvas = CanvasController::new(400, 300);
    canvas.on_pointer_begin(Pos2::new(20.0, 150.0));
    canvas.on_pointer_move(Pos2::new(380.0, 150.0));
    canvas.on_pointer_end(Pos2::new(380.0, 150.0));
    assert_eq!(mark_count(canvas.bitmap()), 1);
    canvas
}

#[test]
fn test_selecting_stamp_starts_session_and_blocks_drawing() {
    let mut canvas = CanvasController::new(400, 300);
    assert!(canvas.on_tool_selected(2));

    assert_eq!(canvas.active_tool(), ToolKind::RectangleStamp);
    assert!(canvas.is_editing_shape());
    assert!(!canvas.is_drawable());

    canvas.on_pointer_begin(Pos2::new(10.0, 10.0));
    canvas.on_pointer_move(Pos2::new(50.0, 50.0));
    canvas.on_pointer_end(Pos2::new(50.0, 50.0));
    assert!(canvas.bitmap().is_blank());
}

#[test]
fn test_decline_leaves_bitmap_identical() {
    let mut canvas = canvas_with_stroke();
    let before = canvas.bitmap().clone();

    canvas.select_tool(ToolKind::EllipseStamp);
    canvas.on_pinch(2.0);
    canvas.on_pan(Vec2::new(30.0, -10.0));
    canvas.decline_shape();

    assert_eq!(canvas.bitmap(), &before);
    assert_eq!(canvas.active_tool(), ToolKind::Brush);
    assert!(!canvas.is_editing_shape());
    assert!(canvas.is_drawable());
}

#[test]
fn test_switching_away_from_stamp_discards_outline() {
    let mut canvas = canvas_with_stroke();
    let before = canvas.bitmap().clone();

    canvas.select_tool(ToolKind::TriangleStamp);
    canvas.select_tool(ToolKind::Eraser);

    assert_eq!(canvas.bitmap(), &before);
    assert!(!canvas.is_editing_shape());
    assert!(canvas.is_drawable());
}

#[test]
fn test_accept_commits_and_returns_to_brush() {
    let mut canvas = CanvasController::new(400, 300);
    canvas.select_tool(ToolKind::RectangleStamp);

    assert_eq!(canvas.accept_shape(), SessionOutcome::Committed);
    assert_eq!(canvas.active_tool(), ToolKind::Brush);
    assert!(canvas.is_drawable());
    // square centered on (200, 150) with its top edge at y = 50
    assert_eq!(canvas.bitmap().pixel(200, 50).unwrap()[3], 255);
    assert_eq!(canvas.bitmap().pixel(200, 150).unwrap()[3], 0);
    assert_eq!(mark_count(canvas.bitmap()), 1);
}

#[test]
fn test_accept_without_session_is_cancelled() {
    let mut canvas = CanvasController::new(100, 100);
    assert_eq!(canvas.accept_shape(), SessionOutcome::Cancelled);
    assert!(canvas.bitmap().is_blank());
}

#[test]
fn test_open_panel_blocks_drawing_until_closed() {
    let mut canvas = CanvasController::new(200, 200);
    canvas.open_panel(Panel::Settings);
    assert_eq!(canvas.current_panel(), Some(Panel::Settings));

    canvas.on_pointer_begin(Pos2::new(10.0, 10.0));
    canvas.on_pointer_move(Pos2::new(100.0, 100.0));
    canvas.on_pointer_end(Pos2::new(100.0, 100.0));
    assert!(canvas.bitmap().is_blank());
    assert!(canvas.scratch().is_blank());

    canvas.close_panel();
    assert!(canvas.is_drawable());
    canvas.on_pointer_begin(Pos2::new(10.0, 10.0));
    canvas.on_pointer_end(Pos2::new(10.0, 10.0));
    assert_eq!(mark_count(canvas.bitmap()), 1);
}

#[test]
fn test_opening_panel_mid_stroke_drops_it() {
    let mut canvas = CanvasController::new(200, 200);
    canvas.on_pointer_begin(Pos2::new(10.0, 10.0));
    canvas.on_pointer_move(Pos2::new(100.0, 10.0));
    assert!(!canvas.scratch().is_blank());

    canvas.open_panel(Panel::ColorPicker);
    canvas.close_panel();
    canvas.on_pointer_end(Pos2::new(100.0, 10.0));

    assert!(canvas.scratch().is_blank());
    assert!(canvas.bitmap().is_blank());
}

#[test]
fn test_closing_panel_keeps_stamp_non_drawable() {
    let mut canvas = CanvasController::new(200, 200);
    canvas.select_tool(ToolKind::EllipseStamp);
    canvas.open_panel(Panel::ColorPicker);
    canvas.close_panel();

    assert!(!canvas.is_drawable());
    assert!(canvas.is_editing_shape());
}

#[test]
fn test_invalid_indices_are_ignored() {
    let mut canvas = CanvasController::new(50, 50);
    let brush = *canvas.brush();

    assert!(!canvas.on_tool_selected(5));
    assert!(!canvas.on_color_selected(16));
    assert_eq!(canvas.active_tool(), ToolKind::Brush);
    assert_eq!(canvas.brush(), &brush);
}

#[test]
fn test_invalid_brush_values_are_rejected() {
    let mut canvas = CanvasController::new(50, 50);

    assert_eq!(
        canvas.on_brush_width_changed(0.0),
        Err(DrawError::InvalidWidth(0.0))
    );
    assert_eq!(
        canvas.on_brush_opacity_changed(2.0),
        Err(DrawError::InvalidOpacity(2.0))
    );
    assert_eq!(canvas.brush().width(), 10.0);
    assert_eq!(canvas.brush().opacity(), 1.0);
}

#[test]
fn test_resize_preserves_existing_pixels() {
    let mut canvas = canvas_with_stroke();
    let before = canvas.bitmap().clone();

    canvas.resize(500, 400);
    assert_eq!(canvas.bitmap().size(), (500, 400));
    assert_eq!(canvas.scratch().size(), (500, 400));
    for (x, y, pixel) in before.image().enumerate_pixels() {
        assert_eq!(canvas.bitmap().pixel(x, y), Some(*pixel));
    }
}

#[test]
fn test_event_sequence_through_handle() {
    let mut canvas = CanvasController::new(300, 300);
    let revision = canvas.revision();

    for event in [
        CanvasEvent::ColorSelected(10),
        CanvasEvent::BrushWidthChanged(4.0),
        CanvasEvent::PointerBegin(Pos2::new(10.0, 10.0)),
        CanvasEvent::PointerMove(Pos2::new(60.0, 10.0)),
        CanvasEvent::PointerEnd(Pos2::new(60.0, 10.0)),
        CanvasEvent::ToolSelected(4),
        CanvasEvent::Pinch(0.5),
        CanvasEvent::Pan(Vec2::new(50.0, 50.0)),
        CanvasEvent::AcceptShape,
    ] {
        canvas.handle(event);
    }

    assert!(canvas.revision() > revision);
    assert_eq!(canvas.active_tool(), ToolKind::Brush);
    assert_eq!(canvas.brush().width(), 4.0);
    assert_eq!(mark_count(canvas.bitmap()), 2);
    assert_eq!(canvas.bitmap().pixel(30, 10).unwrap().0, [0, 0, 255, 255]);

    canvas.handle(CanvasEvent::Resized { width: 100, height: 100 });
    assert_eq!(canvas.bitmap().size(), (100, 100));
}

#[test]
fn test_release_without_press_paints_nothing() {
    let mut canvas = CanvasController::new(100, 100);
    canvas.on_pointer_move(Pos2::new(50.0, 50.0));
    canvas.on_pointer_end(Pos2::new(50.0, 50.0));

    assert!(canvas.bitmap().is_blank());
    assert!(canvas.scratch().is_blank());
}

#[test]
fn test_revision_only_moves_when_pixels_change() {
    let mut canvas = CanvasController::new(100, 100);
    let revision = canvas.revision();

    canvas.on_pointer_move(Pos2::new(10.0, 10.0));
    canvas.on_pointer_move(Pos2::new(20.0, 10.0));
    assert_eq!(canvas.revision(), revision);

    canvas.on_pointer_begin(Pos2::new(10.0, 50.0));
    canvas.on_pointer_move(Pos2::new(60.0, 50.0));
    assert!(canvas.revision() > revision);
}
