use egui::{Color32, Rect, Shape, Stroke, pos2, vec2};

use crate::DrawPadApp;
use crate::input::CanvasEvent;

pub fn central_panel(app: &mut DrawPadApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(Color32::from_gray(220)))
        .show(ctx, |ui| {
            let canvas_rect = ui.available_rect_before_wrap();
            let width = canvas_rect.width().max(1.0) as u32;
            let height = canvas_rect.height().max(1.0) as u32;
            app.dispatch(CanvasEvent::Resized { width, height });

            // Handle input
            let editing = app.controller.is_editing_shape();
            for event in app.input.process_input(ctx, canvas_rect, editing) {
                app.dispatch(event);
            }

            app.textures.sync(ctx, &app.controller);

            // Render the canvas: background, committed bitmap, stroke in progress, stamp overlay
            let painter = ui.painter_at(canvas_rect);
            painter.rect_filled(canvas_rect, 0.0, Color32::WHITE);

            let layer_rect = Rect::from_min_size(canvas_rect.min, vec2(width as f32, height as f32));
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            if let Some(texture) = app.textures.bitmap() {
                painter.image(texture, layer_rect, uv, Color32::WHITE);
            }
            if let Some(texture) = app.textures.scratch() {
                let tint = Color32::WHITE.gamma_multiply(app.controller.ink().opacity);
                painter.image(texture, layer_rect, uv, tint);
            }

            if let Some(overlay) = app.controller.overlay() {
                let points: Vec<_> = overlay
                    .path
                    .points()
                    .iter()
                    .map(|p| canvas_rect.min + p.to_vec2())
                    .collect();
                let stroke = Stroke::new(overlay.stroke_width, overlay.stroke_color);
                painter.add(if overlay.path.is_closed() {
                    Shape::closed_line(points, stroke)
                } else {
                    Shape::line(points, stroke)
                });
            }

            ui.allocate_rect(canvas_rect, egui::Sense::click_and_drag());
        });
}
