// Engine error types
// All variants indicate a data-quality problem in a schedule record; the
// engine never retries or recovers, callers validate upstream

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A time string did not parse as two colon-separated integers with
    /// hours in 0-23 and minutes in 0-59.
    #[error("malformed time {0:?}: expected 24-hour HH:MM")]
    MalformedTime(String),

    /// A duration or minutes-since-midnight value left the valid range
    /// (negative, past end of day, or end not after start).
    #[error("invalid duration of {0} minutes")]
    InvalidDuration(i64),

    /// A weekday index outside 0-6 (Sunday-based).
    #[error("weekday index {0} outside 0-6")]
    InvalidWeekday(i64),
}
