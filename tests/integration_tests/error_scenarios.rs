//! Error scenario tests
//!
//! Each document breaks one or more rules; the test pins the single message
//! a user would see.

use workweek::prelude::*;
use workweek::schedule::{ScheduleError, ValidationIssue};

use super::fixtures::*;

fn first_error(json: &str) -> Option<String> {
    let schedule = MasterSchedule::from_json(json).unwrap();
    validate_schedule(&schedule).error
}

#[test]
fn test_empty_document_needs_working_days() {
    assert_eq!(
        first_error(EMPTY_SCHEDULE_JSON).as_deref(),
        Some("Select at least one working day")
    );
}

#[test]
fn test_overlap_names_the_day() {
    assert_eq!(
        first_error(OVERLAPPING_DAY_JSON).as_deref(),
        Some("Thursday: Intervals 1 and 2 overlap")
    );
}

#[test]
fn test_break_outside_working_hours() {
    let error = first_error(BREAK_OUTSIDE_JSON).unwrap();
    assert!(error.contains("must be inside a working interval"), "{error}");
}

#[test]
fn test_bad_time_is_a_format_error() {
    let schedule = MasterSchedule::from_json(BAD_TIME_JSON).unwrap();
    let issue = workweek::schedule::validation::check_schedule(&schedule).unwrap_err();

    assert!(issue.is_format_error());
    assert_eq!(issue.to_string(), "Saturday: Invalid time \"9:00\", expected HH:MM");
}

#[test]
fn test_bad_day_fails_to_load() {
    let err = MasterSchedule::from_json(BAD_DAY_JSON).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Parsing);
}

#[test]
fn test_out_of_range_day_is_a_hard_error() {
    assert_eq!(
        DayOfWeek::new(7).unwrap_err(),
        ScheduleError::InvalidDayOfWeek { value: 7 }
    );
}

#[test]
fn test_buffer_boundaries() {
    let base = MasterSchedule::new(crate::common::office_week());
    let check = |minutes| validate_schedule(&base.clone().with_buffer_minutes(Some(minutes))).valid;

    assert!(!check(9));
    assert!(check(10));
    assert!(check(30));
    assert!(!check(31));
}

#[test]
fn test_breaks_checked_before_settings() {
    let schedule = MasterSchedule::from_json(BREAK_OUTSIDE_JSON)
        .unwrap()
        .with_buffer_minutes(Some(0))
        .with_slot_step_minutes(Some(0));

    assert_eq!(
        workweek::schedule::validation::check_schedule(&schedule),
        Err(ValidationIssue::BreakOutsideWorkingHours { position: 1 })
    );
}

#[test]
fn test_breaks_without_days_message() {
    let result = validate_breaks(&[Break::new("12:00", "13:00")], &WorkSchedule::NoSchedule);
    assert_eq!(result.error.as_deref(), Some("Configure working days first"));
}

#[test]
fn test_break_with_bad_time_names_the_value() {
    let schedule = MasterSchedule::new(crate::common::office_week())
        .with_break(Break::new("12:00", "13:00"))
        .with_break(Break::new("15:00", "1530"));

    assert_eq!(
        validate_schedule(&schedule).error.as_deref(),
        Some("Invalid time \"1530\", expected HH:MM")
    );
}
