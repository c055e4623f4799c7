// main.rs - Business Ecosystem Simulator
// Engine lives in the `ecosystem` crate and steps on a tokio timer; this binary only draws it

use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod text;
mod ui;

use cli::Cli;
use ui::EcosystemApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    init_tracing(cli.log_level.as_deref());

    let config = cli.engine_config();
    config.validate()?;
    info!(
        rows = config.rows,
        cols = config.cols,
        interval_ms = config.interval.as_millis() as u64,
        density = config.density,
        seeded = config.seed.is_some(),
        "starting Business Ecosystem Simulator"
    );

    let app = EcosystemApp::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        text::TITLE,
        options,
        Box::new(move |cc| {
            ui::install_theme(&cc.egui_ctx);
            Box::new(app)
        }),
    )?;

    info!("window closed");
    Ok(())
}

/// `--log-level` wins over `RUST_LOG`; both fall back to "info".
fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
