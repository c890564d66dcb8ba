//! Editing workflow tests
//!
//! Sequences an editing surface would run: bulk transforms and day edits on
//! an in-memory schedule, then a validation check before saving.

use chrono::NaiveDate;
use workweek::prelude::*;
use workweek::schedule::{add_interval, remove_interval, toggle_day, update_interval};

use super::fixtures::*;
use crate::common::{day, day_numbers, office_week};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_valid_document_passes() {
    let schedule = MasterSchedule::from_json(VALID_SCHEDULE_JSON).unwrap();
    assert_eq!(validate_schedule(&schedule), ValidationResult::valid());
    assert_eq!(schedule.work_schedule.len(), 5);
    assert_eq!(schedule.breaks()[0].reason.as_deref(), Some("Lunch"));
}

#[test]
fn test_document_round_trip() {
    let schedule = MasterSchedule::from_json(VALID_SCHEDULE_JSON).unwrap();
    let json = schedule.to_json().unwrap();
    assert_eq!(MasterSchedule::from_json(&json).unwrap(), schedule);

    let empty = MasterSchedule::from_json(EMPTY_SCHEDULE_JSON).unwrap();
    assert_eq!(empty, MasterSchedule::default());
}

#[test]
fn test_first_setup_from_empty() {
    // Toggle Monday on, shorten it, then copy it to the rest of the week
    let week = toggle_day(&WorkSchedule::NoSchedule, DayOfWeek::MONDAY, true);
    let week = update_interval(&week, DayOfWeek::MONDAY, 0, WorkInterval::new("08:00", "12:00"))
        .unwrap();
    let week = add_interval(&week, DayOfWeek::MONDAY, WorkInterval::new("13:00", "17:00"));
    let week = apply_to_weekdays(&week);

    assert_eq!(day_numbers(&week), vec![1, 2, 3, 4, 5]);
    for d in week.days() {
        assert_eq!(
            d.intervals,
            vec![
                WorkInterval::new("08:00", "12:00"),
                WorkInterval::new("13:00", "17:00"),
            ]
        );
    }

    let schedule = MasterSchedule::new(week)
        .with_break(Break::new("10:00", "10:15").with_reason("Coffee"))
        .with_slot_step_minutes(Some(5));
    assert!(validate_schedule(&schedule).valid);
}

#[test]
fn test_all_days_then_weekdays() {
    // The second call derives its template from the first day of the first call's result
    let start = WorkSchedule::from_days(vec![day(3, &[("07:00", "11:00")])]);
    let all = apply_to_all_days(&start);
    let result = apply_to_weekdays(&all);

    assert_eq!(day_numbers(&result), vec![0, 1, 2, 3, 4, 5, 6]);
    let template = vec![WorkInterval::new("07:00", "11:00")];
    for d in result.days() {
        assert_eq!(d.intervals, template);
    }
}

#[test]
fn test_apply_from_wednesday_keeps_start_of_week() {
    let week = WorkSchedule::from_days(vec![
        day(0, &[("10:00", "14:00")]),
        day(1, &[("09:00", "12:00")]),
        day(2, &[("09:00", "12:00")]),
        day(5, &[("15:00", "16:00")]),
    ]);
    let template = vec![WorkInterval::new("12:00", "20:00")];
    let result = apply_from_date(&week, date(2024, 5, 15), &template);

    for dow in 0..=2 {
        let dow = DayOfWeek::new(dow).unwrap();
        assert_eq!(result.day(dow), week.day(dow));
    }
    for dow in 3..=6 {
        assert_eq!(result.day(DayOfWeek::new(dow).unwrap()).unwrap().intervals, template);
    }
}

#[test]
fn test_block_out_vacation() {
    // Thursday 2024-05-16 .. Saturday 2024-05-18 removes Thu and Fri from an office week
    let result = block_out_range(&office_week(), date(2024, 5, 16), date(2024, 5, 18));
    assert_eq!(day_numbers(&result), vec![1, 2, 3]);

    // Monday .. Sunday removes everything
    let result = block_out_range(&office_week(), date(2024, 5, 13), date(2024, 5, 19));
    assert_eq!(result, WorkSchedule::NoSchedule);

    let schedule = MasterSchedule::new(result);
    assert_eq!(
        validate_schedule(&schedule).error.as_deref(),
        Some("Select at least one working day")
    );
}

#[test]
fn test_removing_last_interval_turns_day_off() {
    let week = WorkSchedule::from_days(vec![day(2, &[("09:00", "10:00")])]);
    let week = remove_interval(&week, DayOfWeek::TUESDAY, 0).unwrap();
    assert_eq!(week, WorkSchedule::NoSchedule);

    let json = serde_json::to_value(MasterSchedule::new(week)).unwrap();
    assert!(json["workSchedule"].is_null());
}

#[test]
fn test_clear_all_ignores_input() {
    let schedule = MasterSchedule::from_json(VALID_SCHEDULE_JSON).unwrap();
    let cleared = schedule.with_work_schedule(clear_all());
    assert!(cleared.work_schedule.is_empty());
    // Breaks remain but now have nothing to sit in
    assert_eq!(
        validate_schedule(&cleared).error.as_deref(),
        Some("Select at least one working day")
    );
}

#[test]
fn test_summary_of_valid_document() {
    let schedule = MasterSchedule::from_json(VALID_SCHEDULE_JSON).unwrap();
    let summary = schedule.summary();

    assert_eq!(summary.working_days(), 5);
    // Mon-Thu: 9h less the 1h lunch, Fri: 6h less the lunch
    assert_eq!(summary.weekly_minutes(), 4 * 480 + 300);
}
