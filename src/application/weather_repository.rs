// Repository trait for current-conditions data access
use crate::domain::conditions::ConditionRecord;
use async_trait::async_trait;

/// Everything that can go wrong during one fetch. All variants are
/// recoverable: the loop turns them into a warning line and tries again on
/// the next scheduled tick.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("weather service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed weather response: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait WeatherRepository: Send + Sync {
    /// Fetch one snapshot of current conditions. Bounded by the
    /// implementation's request timeout; a response missing any required
    /// field is an error, never a partial record.
    async fn fetch_current(&self) -> Result<ConditionRecord, FetchError>;
}
