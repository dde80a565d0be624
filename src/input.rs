use egui::{Context, Pos2, Rect, Vec2};

use crate::canvas::Panel;

/// Everything the canvas reacts to, in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// Index into the tool palette
    ToolSelected(usize),
    /// Index into the color palette
    ColorSelected(usize),
    BrushWidthChanged(f32),
    /// Opacity in `[0, 1]`
    BrushOpacityChanged(f32),
    PointerBegin(Pos2),
    PointerMove(Pos2),
    PointerEnd(Pos2),
    /// Scale since the pinch gesture started
    Pinch(f32),
    /// Radians since the rotation gesture started
    Rotate(f32),
    /// Translation since the pan gesture started
    Pan(Vec2),
    AcceptShape,
    DeclineShape,
    PanelOpened(Panel),
    PanelClosed,
    Resized { width: u32, height: u32 },
}

/// Turns raw egui pointer and touch input over the canvas into [`CanvasEvent`]s.
///
/// While a shape is being edited, drags become pans and pinch/rotate input
/// is reported relative to the start of the gesture. Otherwise the primary
/// button drives freehand drawing.
#[derive(Debug)]
pub struct InputHandler {
    press_origin: Option<Pos2>,
    last_pointer_pos: Option<Pos2>,
    touch_scale: f32,
    touch_rotation: f32,
    touch_active: bool,
    wheel_scale: f32,
    was_editing: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            press_origin: None,
            last_pointer_pos: None,
            touch_scale: 1.0,
            touch_rotation: 0.0,
            touch_active: false,
            wheel_scale: 1.0,
            was_editing: false,
        }
    }

    fn reset_gestures(&mut self) {
        self.touch_scale = 1.0;
        self.touch_rotation = 0.0;
        self.touch_active = false;
        self.wheel_scale = 1.0;
    }

    /// Process this frame's input. `canvas_rect` is where the canvas is shown
    /// on screen, `editing` whether a shape session is active.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect, editing: bool) -> Vec<CanvasEvent> {
        if editing != self.was_editing {
            self.reset_gestures();
            self.press_origin = None;
            self.last_pointer_pos = None;
            self.was_editing = editing;
        }

        let to_local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();
        let mut events = Vec::new();

        ctx.input(|input| {
            if editing {
                if let Some(touch) = input.multi_touch() {
                    self.touch_active = true;
                    self.touch_scale *= touch.zoom_delta;
                    self.touch_rotation += touch.rotation_delta;
                    events.push(CanvasEvent::Pinch(self.touch_scale));
                    events.push(CanvasEvent::Rotate(self.touch_rotation));
                } else {
                    if self.touch_active {
                        // the two-finger gesture ended, the next one starts from identity
                        self.touch_active = false;
                        self.touch_scale = 1.0;
                        self.touch_rotation = 0.0;
                    }
                    let zoom = input.zoom_delta();
                    if zoom != 1.0 {
                        self.wheel_scale *= zoom;
                        events.push(CanvasEvent::Pinch(self.wheel_scale));
                    }
                }
            }

            let pointer = &input.pointer;
            if pointer.primary_pressed() {
                if let Some(pos) = pointer.interact_pos().filter(|pos| canvas_rect.contains(*pos)) {
                    self.press_origin = Some(pos);
                    self.last_pointer_pos = Some(pos);
                    if !editing {
                        events.push(CanvasEvent::PointerBegin(to_local(pos)));
                    }
                }
            }

            let Some(origin) = self.press_origin else {
                return;
            };

            if pointer.primary_down() {
                if let Some(pos) = pointer.latest_pos().filter(|pos| Some(*pos) != self.last_pointer_pos) {
                    self.last_pointer_pos = Some(pos);
                    events.push(if editing {
                        CanvasEvent::Pan(pos - origin)
                    } else {
                        CanvasEvent::PointerMove(to_local(pos))
                    });
                }
            }

            if pointer.primary_released() {
                let pos = pointer.latest_pos().or(self.last_pointer_pos).unwrap_or(origin);
                if !editing {
                    events.push(CanvasEvent::PointerEnd(to_local(pos)));
                }
                self.press_origin = None;
                self.last_pointer_pos = None;
            }
        });

        events
    }
}
