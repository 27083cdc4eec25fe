// Dashboard session state
use crate::domain::conditions::ConditionRecord;
use chrono::{DateTime, Local};

/// Mutable state for one dashboard session, owned exclusively by the
/// refresh loop.
///
/// `latest` and `last_update` are set and replaced together; a failed
/// refresh records an error message but never discards a reading that
/// already succeeded.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub running: bool,
    pub latest: Option<ConditionRecord>,
    pub last_update: Option<DateTime<Local>>,
    pub last_error: Option<String>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            running: true,
            latest: None,
            last_update: None,
            last_error: None,
        }
    }

    /// Record a successful fetch. Replaces the previous reading and clears
    /// any standing error.
    pub fn apply_reading(&mut self, record: ConditionRecord, at: DateTime<Local>) {
        self.latest = Some(record);
        self.last_update = Some(at);
        self.last_error = None;
    }

    /// Record a failed fetch. The previous reading and its timestamp stay
    /// in place so the dashboard keeps showing stale-but-real data.
    pub fn apply_fetch_failure(&mut self, message: String) {
        self.last_error = Some(message);
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
