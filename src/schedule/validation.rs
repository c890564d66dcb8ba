//! Schedule validation
//!
//! Every check is an ordered list of gates evaluated with `?`: the first gate
//! that fails decides the single reason reported back. Which rule is checked
//! first is part of the contract, since it picks the message a user sees.
//!
//! Order for one day's intervals:
//!
//! 1. at least one interval
//! 2. per interval, in list order: `HH:MM` format, then `from < to`
//! 3. pairwise overlap, `(i, j)` with `i < j` in ascending order
//!
//! Order for breaks (after "no breaks" and "no working days"), per break in list order:
//! format, `from < to`, overlap with every later break, then containment in some
//! working interval of any day.
//!
//! Order for a whole schedule: working days present, no duplicate days, each
//! day's intervals in list order, breaks, buffer range, slot step.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use thiserror::Error;

use super::model::{Break, DayOfWeek, MasterSchedule, WorkInterval, WorkSchedule};
use super::time::{contains, overlaps, parse_time, Span};

/// Accepted values for `defaultBufferMinutes`
pub const BUFFER_MINUTES_RANGE: RangeInclusive<i64> = 10..=30;

/// Accepted values for `slotStepMinutes`
pub const SLOT_STEP_MINUTES: [i64; 3] = [5, 10, 15];

// ============================================================================
// Validation Issue
// ============================================================================

/// The rule a schedule broke, with its user-facing message
///
/// Positions are 1-based so they can be shown as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Add at least one working interval")]
    NoIntervals,

    #[error("Invalid time \"{value}\", expected HH:MM")]
    TimeFormat { value: String },

    #[error("Interval {position}: start time must be before end time")]
    IntervalOrder { position: usize },

    #[error("Intervals {first} and {second} overlap")]
    IntervalOverlap { first: usize, second: usize },

    #[error("Configure working days first")]
    BreaksWithoutWorkingDays,

    #[error("Break {position}: start time must be before end time")]
    BreakOrder { position: usize },

    #[error("Breaks {first} and {second} overlap")]
    BreakOverlap { first: usize, second: usize },

    #[error("Break {position} must be inside a working interval")]
    BreakOutsideWorkingHours { position: usize },

    #[error("Select at least one working day")]
    NoWorkingDays,

    #[error("{day} is listed more than once")]
    DuplicateDay { day: DayOfWeek },

    #[error("{day}: {issue}")]
    Day {
        day: DayOfWeek,
        issue: Box<ValidationIssue>,
    },

    #[error("Default buffer must be between 10 and 30 minutes (got {minutes})")]
    BufferOutOfRange { minutes: i64 },

    #[error("Slot step must be 5, 10 or 15 minutes (got {minutes})")]
    InvalidSlotStep { minutes: i64 },
}

impl ValidationIssue {
    /// True for malformed `HH:MM` values, including ones nested under a day
    pub fn is_format_error(&self) -> bool {
        match self {
            Self::TimeFormat { .. } => true,
            Self::Day { issue, .. } => issue.is_format_error(),
            _ => false,
        }
    }
}

// ============================================================================
// Validation Result
// ============================================================================

/// Outcome of a validation call: `{ valid, error? }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(issue: &ValidationIssue) -> Self {
        Self {
            valid: false,
            error: Some(issue.to_string()),
        }
    }
}

impl From<Result<(), ValidationIssue>> for ValidationResult {
    fn from(outcome: Result<(), ValidationIssue>) -> Self {
        match outcome {
            Ok(()) => Self::valid(),
            Err(issue) => Self::invalid(&issue),
        }
    }
}

// ============================================================================
// Checks
// ============================================================================

fn parse_span(from: &str, to: &str) -> Result<Span, ValidationIssue> {
    let parse = |value: &str| {
        parse_time(value).map_err(|_| ValidationIssue::TimeFormat {
            value: value.to_string(),
        })
    };
    Ok(Span::new(parse(from)?, parse(to)?))
}

/// Check one day's intervals, returning the first broken rule
pub fn check_intervals(intervals: &[WorkInterval]) -> Result<(), ValidationIssue> {
    if intervals.is_empty() {
        return Err(ValidationIssue::NoIntervals);
    }

    let mut spans = Vec::with_capacity(intervals.len());
    for (i, interval) in intervals.iter().enumerate() {
        let span = parse_span(&interval.from, &interval.to)?;
        if !span.is_ordered() {
            return Err(ValidationIssue::IntervalOrder { position: i + 1 });
        }
        spans.push(span);
    }

    for i in 0..spans.len() {
        for j in (i + 1)..spans.len() {
            if overlaps(&spans[i], &spans[j]) {
                return Err(ValidationIssue::IntervalOverlap {
                    first: i + 1,
                    second: j + 1,
                });
            }
        }
    }

    Ok(())
}

/// Check breaks against each other and against the working intervals of all days
pub fn check_breaks(breaks: &[Break], work_schedule: &WorkSchedule) -> Result<(), ValidationIssue> {
    if breaks.is_empty() {
        return Ok(());
    }
    if work_schedule.is_empty() {
        return Err(ValidationIssue::BreaksWithoutWorkingDays);
    }

    let pool: Vec<Span> = work_schedule
        .all_intervals()
        .filter_map(|interval| interval.span().ok())
        .collect();
    // A later break that is malformed or inverted is skipped in the pair check;
    // its own gates report it when the loop reaches it.
    let parsed: Vec<Option<Span>> = breaks
        .iter()
        .map(|b| b.span().ok().filter(Span::is_ordered))
        .collect();

    for (i, brk) in breaks.iter().enumerate() {
        let span = parse_span(&brk.from, &brk.to)?;
        if !span.is_ordered() {
            return Err(ValidationIssue::BreakOrder { position: i + 1 });
        }

        for (j, other) in parsed.iter().enumerate().skip(i + 1) {
            if let Some(other) = other {
                if overlaps(&span, other) {
                    return Err(ValidationIssue::BreakOverlap {
                        first: i + 1,
                        second: j + 1,
                    });
                }
            }
        }

        if !pool.iter().any(|working| contains(working, &span)) {
            return Err(ValidationIssue::BreakOutsideWorkingHours { position: i + 1 });
        }
    }

    Ok(())
}

/// Check a whole schedule, gate by gate
pub fn check_schedule(master: &MasterSchedule) -> Result<(), ValidationIssue> {
    let days = master.work_schedule.days();
    if days.is_empty() {
        return Err(ValidationIssue::NoWorkingDays);
    }

    let mut seen = BTreeSet::new();
    for day in days {
        if !seen.insert(day.day_of_week) {
            return Err(ValidationIssue::DuplicateDay {
                day: day.day_of_week,
            });
        }
    }

    for day in days {
        check_intervals(&day.intervals).map_err(|issue| ValidationIssue::Day {
            day: day.day_of_week,
            issue: Box::new(issue),
        })?;
    }

    check_breaks(master.breaks(), &master.work_schedule)?;

    if let Some(minutes) = master.default_buffer_minutes {
        if !BUFFER_MINUTES_RANGE.contains(&minutes) {
            return Err(ValidationIssue::BufferOutOfRange { minutes });
        }
    }

    if let Some(minutes) = master.slot_step_minutes {
        if !SLOT_STEP_MINUTES.contains(&minutes) {
            return Err(ValidationIssue::InvalidSlotStep { minutes });
        }
    }

    Ok(())
}

// ============================================================================
// Result-returning entry points
// ============================================================================

/// Validate one day's intervals
pub fn validate_intervals(intervals: &[WorkInterval]) -> ValidationResult {
    report("intervals", check_intervals(intervals))
}

/// Validate breaks against the working schedule
pub fn validate_breaks(breaks: &[Break], work_schedule: &WorkSchedule) -> ValidationResult {
    report("breaks", check_breaks(breaks, work_schedule))
}

/// Validate a complete schedule before it is saved
pub fn validate_schedule(master: &MasterSchedule) -> ValidationResult {
    report("schedule", check_schedule(master))
}

fn report(target: &str, outcome: Result<(), ValidationIssue>) -> ValidationResult {
    if let Err(ref issue) = outcome {
        tracing::debug!(target_kind = target, reason = %issue, "Validation failed");
    }
    outcome.into()
}
