//! EV Dash - Electric Vehicle Population Analytics Dashboard
//!
//! Loads the EV registration CSV and displays summary metrics and
//! interactive charts with year/make filtering.

use eframe::egui;
use evdash::gui::EvDashApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1100.0, 700.0])
            .with_title("EV Dash"),
        ..Default::default()
    };

    eframe::run_native(
        "EV Dash",
        options,
        Box::new(|cc| Ok(Box::new(EvDashApp::new(cc)))),
    )
}
