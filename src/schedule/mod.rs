//! Weekly availability schedule core
//!
//! A provider's availability is a weekly pattern: which days are worked, the
//! working intervals on each of those days, breaks shared by every day, and two
//! slot-generation settings. This module holds the pattern itself, the rules
//! that make it coherent, and the edits a scheduling UI performs on it.
//!
//! Everything here is synchronous and pure. Each call takes the full input and
//! returns a new value; storing the result is up to the caller.
//!
//! # Modules
//!
//! - [`time`] - `HH:MM` parsing, overlap and containment predicates
//! - [`model`] - wire-compatible schedule types
//! - [`validation`] - first-error-wins checks returning [`ValidationResult`]
//! - [`transform`] - bulk edits (weekdays, all days, clear, from date, block out)
//! - [`editor`] - single-day edits (toggle, add/update/remove interval)
//! - [`error`] - hard failures for invalid caller input
//!
//! # Example
//!
//! ```
//! use workweek::schedule::{transform, validate_schedule, MasterSchedule, WorkSchedule};
//!
//! let week = transform::apply_to_weekdays(&WorkSchedule::NoSchedule);
//! let schedule = MasterSchedule::new(week).with_slot_step_minutes(Some(15));
//!
//! assert!(validate_schedule(&schedule).valid);
//! ```
//!
//! # Empty state
//!
//! | Wire value           | Model                        |
//! |----------------------|------------------------------|
//! | `workSchedule: null` | `WorkSchedule::NoSchedule`   |
//! | `workSchedule: []`   | `WorkSchedule::NoSchedule`   |
//! | `workSchedule: [..]` | `WorkSchedule::Schedule(..)` |
//!
//! Every edit that would leave no days returns `NoSchedule`, and it serializes back as `null`.

pub mod editor;
pub mod error;
pub mod model;
pub mod time;
pub mod transform;
pub mod validation;

// Re-export main types
pub use editor::{add_interval, remove_interval, toggle_day, update_interval};
pub use error::{ScheduleError, ScheduleResult};
pub use model::{
    Break, DayOfWeek, DaySchedule, DaySummary, MasterSchedule, ScheduleSummary, WorkInterval,
    WorkSchedule,
};
pub use time::{contains, overlaps, parse_time, precedes, Span, TimeOfDay};
pub use transform::{
    apply_from_date, apply_to_all_days, apply_to_weekdays, block_out_range, clear_all,
    template_intervals,
};
pub use validation::{
    validate_breaks, validate_intervals, validate_schedule, ValidationIssue, ValidationResult,
};
