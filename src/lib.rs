//! workweek - Weekly availability schedules for booking systems
//!
//! A service provider describes when they work as a weekly pattern: working
//! days, time intervals per day, shared breaks, and slot-generation settings.
//! This crate keeps that pattern coherent and edits it in bulk.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`schedule`] - Schedule model, validation engine and bulk transforms
//! - [`store`] - Whole-document JSON storage of a schedule
//! - [`config`] - Configuration management and settings
//! - [`error`] - Unified error type
//! - [`utils`] - Common utilities and helpers
//!
//! # Example
//!
//! ```
//! use workweek::prelude::*;
//!
//! let week = apply_to_all_days(&WorkSchedule::NoSchedule);
//! let schedule = MasterSchedule::new(week)
//!     .with_break(Break::new("12:00", "13:00").with_reason("Lunch"))
//!     .with_buffer_minutes(Some(15));
//!
//! let result = validate_schedule(&schedule);
//! assert!(result.valid, "{:?}", result.error);
//! ```

pub mod config;
pub mod error;
pub mod schedule;
pub mod store;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, ErrorCategory, Result, WorkweekErrorTrait};
    pub use crate::schedule::{
        apply_from_date, apply_to_all_days, apply_to_weekdays, block_out_range, clear_all,
        validate_breaks, validate_intervals, validate_schedule, Break, DayOfWeek, DaySchedule,
        MasterSchedule, ValidationResult, WorkInterval, WorkSchedule,
    };
    pub use crate::store::ScheduleStore;
}

// Direct re-exports for convenience
pub use schedule::{MasterSchedule, ValidationResult, WorkSchedule};
