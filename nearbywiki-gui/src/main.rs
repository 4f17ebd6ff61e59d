// Disable console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use app::NearbyWikiApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::init(); // Initialize logging

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 860.0])
            .with_min_inner_size([480.0, 400.0])
            .with_title("📍 NearbyWiki - Wikipedia Articles Near You"),
        ..Default::default()
    };

    eframe::run_native(
        "nearbywiki",
        native_options,
        Box::new(|cc| Ok(Box::new(NearbyWikiApp::new(cc)))),
    )
}
