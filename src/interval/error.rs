use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned by the validating interval constructors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("Interval start {start} is after its end {end}")]
    StartAfterEnd {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}
