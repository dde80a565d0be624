use egui::{Sense, vec2};

use crate::DrawPadApp;
use crate::canvas::Panel;
use crate::input::CanvasEvent;
use crate::palette::ColorPalette;
use crate::texture_manager::PREVIEW_SIZE;

const SWATCHES_PER_ROW: usize = 4;

/// 4x4 grid of swatches. Picking one closes the window.
pub fn color_picker_window(app: &mut DrawPadApp, ctx: &egui::Context) {
    if app.controller().current_panel() != Some(Panel::ColorPicker) {
        return;
    }

    let mut open = true;
    let mut picked = None;
    egui::Window::new("Colors")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            egui::Grid::new("color_grid").spacing([6.0, 6.0]).show(ui, |ui| {
                for entry in ColorPalette.iter() {
                    let (rect, response) = ui.allocate_exact_size(vec2(36.0, 36.0), Sense::click());
                    ui.painter().rect_filled(rect, 6.0, entry.color);
                    if response.on_hover_text(entry.name).clicked() {
                        picked = Some(entry.index);
                    }
                    if (entry.index + 1) % SWATCHES_PER_ROW == 0 {
                        ui.end_row();
                    }
                }
            });
        });

    if let Some(index) = picked {
        app.dispatch(CanvasEvent::ColorSelected(index));
        open = false;
    }
    if !open {
        app.dispatch(CanvasEvent::PanelClosed);
    }
}

/// Width and opacity controls with a live preview dot.
pub fn settings_window(app: &mut DrawPadApp, ctx: &egui::Context) {
    if app.controller().current_panel() != Some(Panel::Settings) {
        return;
    }

    let brush = *app.controller().brush();
    let preview = app.textures.preview(ctx, &brush);

    let mut width = brush.width();
    let initial_percent = (brush.opacity() * 100.0).round();
    let mut opacity_percent = initial_percent;
    let mut open = true;

    egui::Window::new("Brush")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.add(
                egui::Slider::new(&mut width, 1.0..=100.0)
                    .step_by(1.0)
                    .suffix("px")
                    .text("Width"),
            );
            ui.add(
                egui::Slider::new(&mut opacity_percent, 0.0..=100.0)
                    .step_by(1.0)
                    .suffix("%")
                    .text("Opacity"),
            );
            if let Some(texture) = preview {
                let side = PREVIEW_SIZE as f32;
                ui.image((texture, vec2(side, side)));
            }
        });

    if width != brush.width() {
        app.dispatch(CanvasEvent::BrushWidthChanged(width));
    }
    if opacity_percent != initial_percent {
        app.dispatch(CanvasEvent::BrushOpacityChanged(opacity_percent / 100.0));
    }
    if !open {
        app.dispatch(CanvasEvent::PanelClosed);
    }
}
