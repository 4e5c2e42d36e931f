mod controller;
mod ui;

use eframe::egui;
use monitor_core::load_settings;
use tracing_subscriber::EnvFilter;

use crate::ui::AqiMonitorApp;

const APP_TITLE: &str = "Air Quality Monitor";

fn main() -> eframe::Result<()> {
    let settings = load_settings();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    tracing::info!(
        locale = settings.locale.as_deref().unwrap_or("generic"),
        "starting desktop monitor"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([980.0, 680.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(AqiMonitorApp::new(cc, &settings)))),
    )
}
