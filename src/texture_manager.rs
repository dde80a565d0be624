use egui::{Context, TextureHandle, TextureId, TextureOptions};

use crate::brush::BrushState;
use crate::canvas::CanvasController;
use crate::layer::Layer;
use crate::tools::brush_preview;

/// Side of the square settings preview, in pixels.
pub const PREVIEW_SIZE: u32 = 60;

/// GPU copies of the canvas layers, re-uploaded only when the controller's
/// revision changes.
#[derive(Default)]
pub struct TextureManager {
    bitmap: Option<TextureHandle>,
    scratch: Option<TextureHandle>,
    preview: Option<TextureHandle>,
    preview_brush: Option<BrushState>,
    /// Revision the bitmap and scratch textures were uploaded at
    revision: Option<u64>,
}

impl std::fmt::Debug for TextureManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureManager")
            .field("revision", &self.revision)
            .field("has_bitmap", &self.bitmap.is_some())
            .field("has_scratch", &self.scratch.is_some())
            .finish()
    }
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads the bitmap and scratch layers if they changed since the last call.
    pub fn sync(&mut self, ctx: &Context, controller: &CanvasController) {
        if self.revision == Some(controller.revision()) && self.bitmap.is_some() {
            return;
        }
        upload(ctx, &mut self.bitmap, "canvas_bitmap", controller.bitmap());
        upload(ctx, &mut self.scratch, "canvas_scratch", controller.scratch());
        self.revision = Some(controller.revision());
    }

    pub fn bitmap(&self) -> Option<TextureId> {
        self.bitmap.as_ref().map(TextureHandle::id)
    }

    pub fn scratch(&self) -> Option<TextureId> {
        self.scratch.as_ref().map(TextureHandle::id)
    }

    /// Preview dot for `brush`, re-rendered only when the brush changed.
    pub fn preview(&mut self, ctx: &Context, brush: &BrushState) -> Option<TextureId> {
        if self.preview_brush.as_ref() != Some(brush) {
            match brush_preview(brush, PREVIEW_SIZE) {
                Ok(layer) => upload(ctx, &mut self.preview, "brush_preview", &layer),
                Err(err) => log::warn!("Failed to render brush preview: {err}"),
            }
            self.preview_brush = Some(*brush);
        }
        self.preview.as_ref().map(TextureHandle::id)
    }
}

fn upload(ctx: &Context, slot: &mut Option<TextureHandle>, name: &str, layer: &Layer) {
    let image = layer.to_color_image();
    match slot {
        Some(handle) if handle.size() == image.size => handle.set(image, TextureOptions::LINEAR),
        _ => *slot = Some(ctx.load_texture(name, image, TextureOptions::LINEAR)),
    }
}
