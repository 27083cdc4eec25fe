// Dashboard service - Timed refresh, redraw, and quit polling
use crate::application::display_renderer::DisplayRenderer;
use crate::application::input_watcher::InputWatcher;
use crate::application::weather_repository::WeatherRepository;
use crate::domain::session::DashboardState;
use chrono::Local;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);
pub const IDLE_SLEEP: Duration = Duration::from_millis(100);

/// Drives the single-threaded fetch -> render -> poll -> sleep cycle.
///
/// Fetch, redraw, and input polling run strictly sequentially; the only
/// blocking step is the fetch, bounded by the repository's own timeout.
pub struct DashboardService {
    repository: Arc<dyn WeatherRepository>,
    refresh_interval: Duration,
    idle_sleep: Duration,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn WeatherRepository>) -> Self {
        Self::with_timing(repository, REFRESH_INTERVAL, IDLE_SLEEP)
    }

    /// Same loop with injectable intervals so tests don't wait wall-clock
    /// minutes.
    pub fn with_timing(
        repository: Arc<dyn WeatherRepository>,
        refresh_interval: Duration,
        idle_sleep: Duration,
    ) -> Self {
        Self {
            repository,
            refresh_interval,
            idle_sleep,
        }
    }

    /// Perform one fetch and fold the outcome into the state. A failure
    /// becomes a warning message; the previous reading stays on screen.
    pub async fn refresh(&self, state: &mut DashboardState) {
        match self.repository.fetch_current().await {
            Ok(record) => {
                tracing::debug!(weather_code = record.weather_code, "refreshed conditions");
                state.apply_reading(record, Local::now());
            }
            Err(err) => {
                tracing::warn!("fetch failed: {err}");
                state.apply_fetch_failure(err.to_string());
            }
        }
    }

    /// Run until a quit keypress. Expects the terminal already in raw mode
    /// (the input watcher's scope covers the whole run).
    pub async fn run(
        &self,
        state: &mut DashboardState,
        input: &mut dyn InputWatcher,
        display: &mut dyn DisplayRenderer,
    ) -> anyhow::Result<()> {
        // First reading before the loop so the screen is never blank longer
        // than one fetch, whatever the outcome.
        self.refresh(state).await;
        display.render(state)?;
        let mut last_fetch = Instant::now();

        while state.running {
            if last_fetch.elapsed() >= self.refresh_interval {
                self.refresh(state).await;
                display.render(state)?;
                last_fetch = Instant::now();
            }

            if input.poll_quit()? {
                state.stop();
                continue;
            }

            tokio::time::sleep(self.idle_sleep).await;
        }

        Ok(())
    }
}
