//! Error types for the on-call service client.

use thiserror::Error;

/// Errors that can occur talking to the on-call management service.
#[derive(Debug, Error)]
pub enum OnCallError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status
    #[error("on-call service returned {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Client is not configured
    #[error("authentication error: {0}")]
    Auth(String),

    /// The requested schedule does not exist or has too few shifts
    #[error("schedule not found: {0}")]
    ScheduleNotFound(String),

    /// Response body could not be deserialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The service reported a shift whose start is after its end
    #[error("invalid shift window: {0}")]
    InvalidWindow(#[from] handoff_report::PeriodError),
}
