// Main entry point - Dependency injection and dashboard loop
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use crate::application::dashboard_service::DashboardService;
use crate::domain::session::DashboardState;
use crate::infrastructure::open_meteo::OpenMeteoRepository;
use crate::infrastructure::terminal::TerminalInput;
use crate::presentation::renderer::Screen;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Stdout belongs to the renderer, so tracing writes to a log file.
    init_tracing()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(OpenMeteoRepository::new()?);

    // Create service (application layer) and session state
    let service = DashboardService::new(repository);
    let mut state = DashboardState::new();
    let mut screen = Screen::stdout();

    // Raw mode is held for exactly the lifetime of `input`. Every startup
    // failure above exits before the terminal mode is touched.
    let mut input = TerminalInput::acquire()?;

    let outcome = tokio::select! {
        res = service.run(&mut state, &mut input, &mut screen) => res,
        // An interrupt delivered as a process signal (rather than a raw-mode
        // key event) takes the same teardown path as a quit keypress.
        _ = tokio::signal::ctrl_c() => Ok(()),
    };

    drop(input);
    screen.clear()?;
    outcome
}

fn init_tracing() -> anyhow::Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(std::env::temp_dir().join("weather-dashboard.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
