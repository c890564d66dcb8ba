//! Unified error handling for the workweek crate
//!
//! Schedule rule violations are values ([`ValidationResult`](crate::schedule::ValidationResult)),
//! not errors. This module covers everything that stops an operation from running:
//! invalid caller input, I/O, malformed documents, configuration, and saves
//! refused because the schedule did not validate.
//!
//! # Architecture
//!
//! - [`WorkweekErrorTrait`] - Common interface implemented by the crate errors
//! - [`ErrorCategory`] - Classification of errors for handling strategies
//! - [`Error`] - Unified error enum wrapping domain-specific errors
//!
//! # Usage
//!
//! ```rust,ignore
//! use workweek::error::{Error, WorkweekErrorTrait};
//!
//! fn handle_error(err: Error) {
//!     if err.is_recoverable() {
//!         eprintln!("Try again: {}", err.user_message());
//!     } else {
//!         eprintln!("Error: {}", err);
//!     }
//! }
//! ```

use std::io;
use thiserror::Error;

pub use crate::schedule::error::ScheduleError;

/// Common trait for workweek error types
pub trait WorkweekErrorTrait: std::error::Error {
    /// Check if this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Message suitable for showing to an end user
    fn user_message(&self) -> String;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Invalid input to a schedule operation
    Schedule,
    /// A schedule that failed validation
    Validation,
    /// Storage and I/O errors
    Storage,
    /// Malformed documents
    Parsing,
    /// Configuration errors
    Config,
    /// Other/unknown errors
    Other,
}

impl ErrorCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Schedule => "schedule error",
            Self::Validation => "validation error",
            Self::Storage => "storage error",
            Self::Parsing => "parse error",
            Self::Config => "configuration error",
            Self::Other => "error",
        }
    }
}

/// Unified error type for the workweek crate
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input to a schedule operation
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Save refused because the schedule is invalid
    #[error("Schedule rejected: {0}")]
    Rejected(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl WorkweekErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Schedule(e) => e.is_recoverable(),
            Self::Rejected(_) => false,
            Self::Io(_) => true, // I/O errors are often transient
            Self::Json(_) => false,
            Self::Config(_) => false,
            Self::Other { .. } => false,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::Rejected(reason) => reason.clone(),
            Self::Other { context, .. } => context.clone(),
            other => format!("{}: {other}", other.category().label()),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Schedule(_) => ErrorCategory::Schedule,
            Self::Rejected(_) => ErrorCategory::Validation,
            Self::Io(_) => ErrorCategory::Storage,
            Self::Json(_) => ErrorCategory::Parsing,
            Self::Config(_) => ErrorCategory::Config,
            Self::Other { .. } => ErrorCategory::Other,
        }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a rejection carrying the first validation error
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    /// Create a generic error with context
    pub fn other(context: impl Into<String>) -> Self {
        Self::Other {
            context: context.into(),
            source: None,
        }
    }

}

// Conversion from anyhow::Error
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other {
            context: err.to_string(),
            source: None,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
