mod config;
mod drag;
mod field;
mod form_state;
#[cfg(test)]
mod form_state_tests;
mod ui;

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::main::FormApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "form_customizer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::load_config();
    tracing::info!(dark_mode = config.dark_mode, "starting Form Customizer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };
    eframe::run_native(
        "Form Customizer",
        options,
        Box::new(|cc| Ok(Box::new(FormApp::new(cc, config)))),
    )
}
