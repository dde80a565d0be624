use egui::{Sense, vec2};

use crate::DrawPadApp;
use crate::canvas::Panel;
use crate::input::CanvasEvent;
use crate::palette::ToolPalette;

pub fn tools_panel(app: &mut DrawPadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(150.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_tool = app.controller().active_tool();
            let mut selected = None;
            for entry in ToolPalette.iter() {
                let label = format!("{} {}", entry.icon, entry.label);
                if ui.selectable_label(entry.kind == active_tool, label).clicked() {
                    selected = Some(entry.index);
                }
            }
            if let Some(index) = selected {
                log::info!("Tool selected from UI: {index}");
                app.dispatch(CanvasEvent::ToolSelected(index));
            }

            ui.separator();

            let brush = *app.controller().brush();
            ui.horizontal(|ui| {
                let (swatch, _) = ui.allocate_exact_size(vec2(18.0, 18.0), Sense::hover());
                ui.painter().rect_filled(swatch, 4.0, brush.color());
                if ui.button("Color").clicked() {
                    app.dispatch(CanvasEvent::PanelOpened(Panel::ColorPicker));
                }
            });
            if ui.button("Settings").clicked() {
                app.dispatch(CanvasEvent::PanelOpened(Panel::Settings));
            }
            ui.label(format!(
                "{:.0}px, {:.0}%",
                brush.width(),
                brush.opacity() * 100.0
            ));

            if let Some(transform) = app.controller().transform() {
                ui.separator();
                ui.label("Drag to move, pinch or ctrl+scroll to scale.");
                ui.label(format!(
                    "Scale {:.2}, rotation {:.0}°",
                    transform.scale,
                    transform.rotation.to_degrees()
                ));
                ui.horizontal(|ui| {
                    if ui.button("✔ Accept").clicked() {
                        app.dispatch(CanvasEvent::AcceptShape);
                    }
                    if ui.button("✖ Decline").clicked() {
                        app.dispatch(CanvasEvent::DeclineShape);
                    }
                });
            }
        });
}
