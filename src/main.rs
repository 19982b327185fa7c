mod app;
mod config;
mod image;
mod session;
mod util;

use app::SnapShopApp;
use config::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn init_tracing(fallback_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> eframe::Result<()> {
    let loaded = AppConfig::load();
    init_tracing(&loaded.config.log_filter);
    loaded.log_summary();

    let initial_image_path: Option<PathBuf> = std::env::args_os().nth(1).map(PathBuf::from);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };
    let config = loaded.config;
    eframe::run_native(
        "SnapShop",
        native_options,
        Box::new(move |_cc| {
            Ok(Box::new(SnapShopApp::new_with_initial_path(
                config,
                initial_image_path.as_deref(),
            )))
        }),
    )
}
