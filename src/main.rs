#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use drawpad::{Config, DrawPadApp};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = match std::env::var_os("DRAWPAD_CONFIG") {
        Some(path) => Config::load(&path).unwrap_or_else(|err| {
            log::warn!("Using default config, {}: {err}", path.to_string_lossy());
            Config::default()
        }),
        None => Config::default(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.canvas_width as f32 + 160.0, config.canvas_height as f32])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "DrawPad",
        native_options,
        Box::new(move |cc| Ok(Box::new(DrawPadApp::new(cc, config)))),
    )
}
