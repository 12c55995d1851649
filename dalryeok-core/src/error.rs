//! Error types for dalryeok.
//!
//! Date, overlap and filter queries never fail; malformed input turns into
//! `Instant::Invalid` or an empty result. These errors cover the plumbing
//! around them.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Notification scheduler has stopped")]
    SchedulerStopped,
}

/// Result type alias for dalryeok operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
