mod app;
mod config;
mod export;
mod format;
mod geodesy;
mod session;
mod types;

use app::WaymarkApp;

/// Console logging; `RUST_LOG` overrides the default filter.
fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,waymark=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .try_init();
}

fn main() -> eframe::Result<()> {
    setup_logging();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Waymark — Waypoint Sketcher",
        native_options,
        Box::new(|cc| Ok(Box::new(WaymarkApp::new(&cc.egui_ctx)))),
    )
}
