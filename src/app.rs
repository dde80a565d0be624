use crate::brush::BrushState;
use crate::canvas::CanvasController;
use crate::config::Config;
use crate::input::{CanvasEvent, InputHandler};
use crate::panels;
use crate::texture_manager::TextureManager;

/// The desktop shell around the canvas. Only brush settings survive a
/// restart, drawings are never persisted.
#[derive(Debug)]
pub struct DrawPadApp {
    pub(crate) controller: CanvasController,
    pub(crate) input: InputHandler,
    pub(crate) textures: TextureManager,
}

impl DrawPadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let mut controller = CanvasController::with_config(&config);

        if let Some(storage) = cc.storage {
            if let Some(brush) = eframe::get_value::<BrushState>(storage, eframe::APP_KEY) {
                log::info!("Restored brush settings: {brush:?}");
                controller.set_brush(brush);
            }
        }

        Self {
            controller,
            input: InputHandler::new(),
            textures: TextureManager::new(),
        }
    }

    pub fn controller(&self) -> &CanvasController {
        &self.controller
    }

    pub fn dispatch(&mut self, event: CanvasEvent) {
        self.controller.handle(event);
    }
}

impl eframe::App for DrawPadApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.controller.brush());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::color_picker_window(self, ctx);
        panels::settings_window(self, ctx);
        panels::central_panel(self, ctx);
    }
}
