//! Error types for the schedule module
//!
//! Rule violations in a schedule are not errors: they are reported through
//! [`ValidationResult`](super::validation::ValidationResult). The variants here
//! cover callers handing the core something it cannot act on at all.

use std::fmt;

/// Result type for schedule operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Schedule-specific errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Day of week outside 0 (Sunday) ..= 6 (Saturday)
    InvalidDayOfWeek { value: i64 },

    /// Time string that is not zero-padded 24-hour `HH:MM`
    InvalidTimeFormat { value: String },

    /// Interval targeted by an edit does not exist
    IntervalNotFound { day: u8, index: usize },

    /// Break targeted by an edit does not exist
    BreakNotFound { index: usize, len: usize },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDayOfWeek { value } => {
                write!(f, "Invalid day of week '{}'. Must be 0-6 (0 = Sunday)", value)
            }
            Self::InvalidTimeFormat { value } => {
                write!(f, "Invalid time '{}'. Expected HH:MM (00:00-23:59)", value)
            }
            Self::IntervalNotFound { day, index } => {
                write!(f, "No interval #{} on day {}", index, day)
            }
            Self::BreakNotFound { index, len } => {
                write!(f, "No break #{} (schedule has {} breaks)", index, len)
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

impl ScheduleError {
    /// Create an invalid day-of-week error
    pub fn invalid_day(value: impl Into<i64>) -> Self {
        Self::InvalidDayOfWeek {
            value: value.into(),
        }
    }

    /// Create an invalid time format error
    pub fn invalid_time(value: impl Into<String>) -> Self {
        Self::InvalidTimeFormat {
            value: value.into(),
        }
    }

    /// Create an interval-not-found error
    pub fn interval_not_found(day: u8, index: usize) -> Self {
        Self::IntervalNotFound { day, index }
    }

    /// Create a break-not-found error
    pub fn break_not_found(index: usize, len: usize) -> Self {
        Self::BreakNotFound { index, len }
    }

    /// Check if the error is recoverable
    ///
    /// Every variant points at a caller bug, so retrying the same call never helps.
    pub fn is_recoverable(&self) -> bool {
        false
    }
}
