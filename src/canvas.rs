use egui::{Pos2, Vec2};

use crate::brush::{BrushState, Ink};
use crate::config::Config;
use crate::error::Result;
use crate::input::CanvasEvent;
use crate::layer::Layer;
use crate::palette::{ColorPalette, Palette, ToolPalette};
use crate::shape::{ShapeGenerator, ShapeOutline};
use crate::tools::{SessionOutcome, ShapeSession, StrokeRasterizer, ToolKind};
use crate::transform::TransformState;

/// Overlay panels that suspend drawing while they are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    ColorPicker,
    Settings,
}

/// Owns the persistent bitmap and the scratch layer, and routes pointer and
/// gesture events to the stroke rasterizer or the shape session depending on
/// the active tool.
#[derive(Debug)]
pub struct CanvasController {
    bitmap: Layer,
    scratch: Layer,
    brush: BrushState,
    active_tool: ToolKind,
    drawable: bool,
    open_panel: Option<Panel>,
    rasterizer: StrokeRasterizer,
    session: ShapeSession,
    revision: u64,
}

impl CanvasController {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_parts(width, height, BrushState::default(), ShapeSession::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let brush = config.brush().unwrap_or_else(|err| {
            log::warn!("Ignoring configured brush: {err}");
            BrushState::default()
        });
        let session = ShapeSession::new(
            ShapeGenerator::new(config.ellipse_segments),
            config.min_shape_scale,
        );
        Self::with_parts(config.canvas_width, config.canvas_height, brush, session)
    }

    fn with_parts(width: u32, height: u32, brush: BrushState, session: ShapeSession) -> Self {
        Self {
            bitmap: Layer::new(width, height),
            scratch: Layer::new(width, height),
            brush,
            active_tool: ToolKind::default(),
            drawable: true,
            open_panel: None,
            rasterizer: StrokeRasterizer::new(),
            session,
            revision: 0,
        }
    }

    pub fn bitmap(&self) -> &Layer {
        &self.bitmap
    }

    pub fn scratch(&self) -> &Layer {
        &self.scratch
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    /// Replaces the brush wholesale, e.g. with settings restored at startup.
    pub fn set_brush(&mut self, brush: BrushState) {
        if brush.is_valid() {
            self.brush = brush;
        } else {
            log::warn!("Rejected invalid brush {brush:?}");
        }
    }

    pub fn active_tool(&self) -> ToolKind {
        self.active_tool
    }

    pub fn is_drawable(&self) -> bool {
        self.drawable
    }

    pub fn current_panel(&self) -> Option<Panel> {
        self.open_panel
    }

    pub fn session(&self) -> &ShapeSession {
        &self.session
    }

    pub fn is_editing_shape(&self) -> bool {
        self.session.is_editing()
    }

    pub fn transform(&self) -> Option<TransformState> {
        self.session.transform()
    }

    /// The stamp outline to draw over the canvas, if one is being edited.
    pub fn overlay(&self) -> Option<ShapeOutline> {
        self.session.overlay()
    }

    /// Bumped whenever the bitmap or scratch pixels change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Ink for the active tool.
    pub fn ink(&self) -> Ink {
        match self.active_tool {
            ToolKind::Eraser => Ink::eraser(&self.brush),
            _ => Ink::from_brush(&self.brush),
        }
    }

    fn home(&self) -> Pos2 {
        let (width, height) = self.bitmap.size();
        Pos2::new(width as f32 / 2.0, height as f32 / 2.0)
    }

    /// Dispatches one boundary event.
    pub fn handle(&mut self, event: CanvasEvent) {
        match event {
            CanvasEvent::ToolSelected(index) => {
                self.on_tool_selected(index);
            }
            CanvasEvent::ColorSelected(index) => {
                self.on_color_selected(index);
            }
            CanvasEvent::BrushWidthChanged(width) => {
                if let Err(err) = self.on_brush_width_changed(width) {
                    log::warn!("{err}");
                }
            }
            CanvasEvent::BrushOpacityChanged(opacity) => {
                if let Err(err) = self.on_brush_opacity_changed(opacity) {
                    log::warn!("{err}");
                }
            }
            CanvasEvent::PointerBegin(point) => self.on_pointer_begin(point),
            CanvasEvent::PointerMove(point) => self.on_pointer_move(point),
            CanvasEvent::PointerEnd(point) => self.on_pointer_end(point),
            CanvasEvent::Pinch(scale) => self.on_pinch(scale),
            CanvasEvent::Rotate(radians) => self.on_rotate(radians),
            CanvasEvent::Pan(delta) => self.on_pan(delta),
            CanvasEvent::AcceptShape => {
                self.accept_shape();
            }
            CanvasEvent::DeclineShape => self.decline_shape(),
            CanvasEvent::PanelOpened(panel) => self.open_panel(panel),
            CanvasEvent::PanelClosed => self.close_panel(),
            CanvasEvent::Resized { width, height } => self.resize(width, height),
        }
    }

    /// Selects the tool at `index` in the tool palette. Out-of-range indices
    /// are ignored and return `false`.
    pub fn on_tool_selected(&mut self, index: usize) -> bool {
        match ToolPalette.get(index) {
            Some(entry) => {
                self.select_tool(entry.kind);
                true
            }
            None => {
                log::warn!("Ignoring unknown tool index {index}");
                false
            }
        }
    }

    pub fn select_tool(&mut self, tool: ToolKind) {
        let old = std::mem::replace(&mut self.active_tool, tool);
        self.on_tool_changed(tool, old);
    }

    fn on_tool_changed(&mut self, new: ToolKind, old: ToolKind) {
        log::info!("Tool changed: {} -> {}", old.name(), new.name());

        if old.is_stamp() && self.session.cancel() {
            log::debug!("Discarded {} outline", old.name());
        }

        match new.stamp() {
            Some(stamp) => {
                self.abort_stroke();
                self.drawable = false;
                let home = self.home();
                self.session.begin(stamp, &self.brush, home);
            }
            None => {
                self.drawable = self.open_panel.is_none();
            }
        }
    }

    pub fn on_color_selected(&mut self, index: usize) -> bool {
        match ColorPalette.get(index) {
            Some(entry) => {
                log::info!("Color selected: {}", entry.name);
                self.brush.set_color(entry.color);
                true
            }
            None => {
                log::warn!("Ignoring unknown color index {index}");
                false
            }
        }
    }

    pub fn on_brush_width_changed(&mut self, width: f32) -> Result<()> {
        self.brush.set_width(width)
    }

    pub fn on_brush_opacity_changed(&mut self, opacity: f32) -> Result<()> {
        self.brush.set_opacity(opacity)
    }

    pub fn on_pointer_begin(&mut self, point: Pos2) {
        if !self.drawable {
            return;
        }
        self.rasterizer.begin(point);
    }

    pub fn on_pointer_move(&mut self, point: Pos2) {
        if !self.drawable {
            return;
        }
        let ink = self.ink();
        match self.rasterizer.move_to(point, &mut self.scratch, ink) {
            Ok(true) => self.revision += 1,
            Ok(false) => {}
            Err(err) => log::warn!("Failed to draw segment: {err}"),
        }
    }

    pub fn on_pointer_end(&mut self, point: Pos2) {
        if !self.drawable || !self.rasterizer.is_drawing() {
            return;
        }
        let ink = self.ink();
        if let Err(err) = self
            .rasterizer
            .end(point, &mut self.scratch, &mut self.bitmap, ink)
        {
            log::warn!("Failed to merge stroke: {err}");
        }
        self.revision += 1;
    }

    pub fn on_pinch(&mut self, scale: f32) {
        if self.session.pinch(scale) {
            log::debug!("Pinch: scale {scale}");
        }
    }

    pub fn on_rotate(&mut self, radians: f32) {
        if self.session.rotate(radians) {
            log::debug!("Rotate: {radians} rad");
        }
    }

    pub fn on_pan(&mut self, delta: Vec2) {
        if self.session.pan(delta) {
            log::debug!("Pan: {delta:?}");
        }
    }

    /// Rasterizes the edited outline into the bitmap and returns to the
    /// default tool.
    pub fn accept_shape(&mut self) -> SessionOutcome {
        let outcome = match self
            .session
            .commit(&self.brush, &mut self.scratch, &mut self.bitmap)
        {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("Failed to commit shape: {err}");
                SessionOutcome::Cancelled
            }
        };
        log::debug!("Shape session ended: {outcome:?}");
        self.revision += 1;
        self.select_tool(ToolKind::default());
        outcome
    }

    /// Discards the edited outline and returns to the default tool.
    pub fn decline_shape(&mut self) {
        self.session.cancel();
        self.select_tool(ToolKind::default());
    }

    /// Suspends drawing while `panel` is shown. A stroke in progress is
    /// dropped so it cannot be merged after the panel closes.
    pub fn open_panel(&mut self, panel: Panel) {
        log::info!("Panel opened: {panel:?}");
        self.open_panel = Some(panel);
        self.drawable = false;
        self.abort_stroke();
    }

    pub fn close_panel(&mut self) {
        if let Some(panel) = self.open_panel.take() {
            log::info!("Panel closed: {panel:?}");
        }
        self.drawable = self.active_tool.uses_pointer_drawing();
    }

    /// Resizes both layers. Bitmap pixels stay anchored at the top-left.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.bitmap.size() == (width, height) {
            return;
        }
        log::info!("Canvas resized to {width}x{height}");
        self.bitmap = self.bitmap.resized(width, height);
        self.scratch = Layer::new(width, height);
        self.rasterizer = StrokeRasterizer::new();
        self.revision += 1;
    }

    fn abort_stroke(&mut self) {
        if self.rasterizer.is_drawing() {
            self.rasterizer.abort(&mut self.scratch);
            self.revision += 1;
        }
    }
}
