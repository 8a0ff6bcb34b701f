mod app;
mod components;
mod screens;
mod theme;
mod utils;

use budget_app_core::{backends, BackendSettings};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    let settings = BackendSettings::load().unwrap_or_else(|e| {
        tracing::error!("Failed to load settings: {e:#}");
        BackendSettings::default()
    });
    let (kind, backend) = backends::connect_or_offline(&settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_min_inner_size([420.0, 520.0])
            .with_title("Budget"),
        ..Default::default()
    };

    eframe::run_native(
        "Budget",
        options,
        Box::new(move |cc| {
            theme::setup(&cc.egui_ctx);
            Ok(Box::new(app::BudgetUiApp::new(kind, backend)))
        }),
    )
}
