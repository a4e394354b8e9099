//! MRO Forecast: aircraft maintenance turnaround calculator.
//!
//! Main entry point for the terminal application.

use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mro_forecast::config::Settings;
use mro_forecast::tui::App;

fn main() -> Result<()> {
    let settings = Settings::from_env();

    // Logs written to the terminal would corrupt the TUI (alternate screen).
    let interactive = std::io::stdout().is_terminal();

    let (writer, _guard) = if settings.log_mode.use_file(interactive) {
        if let Some(parent) = settings.log_file.parent() {
            // Best-effort: a missing directory surfaces as an open error below.
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&settings.log_file)?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .init();

    tracing::info!("Starting MRO Forecast...");

    let mut app = App::new(&settings)?;
    app.run()?;

    tracing::info!("MRO Forecast shutdown complete.");
    Ok(())
}
