//! Common test utilities

use workweek::schedule::{DayOfWeek, DaySchedule, MasterSchedule, WorkInterval, WorkSchedule};

/// Build a day from `(from, to)` pairs
#[allow(dead_code)]
pub fn day(dow: u8, pairs: &[(&str, &str)]) -> DaySchedule {
    DaySchedule::new(
        DayOfWeek::new(dow).unwrap(),
        pairs.iter().map(|(f, t)| WorkInterval::new(*f, *t)).collect(),
    )
}

/// Monday-Friday 09:00-18:00
#[allow(dead_code)]
pub fn office_week() -> WorkSchedule {
    WorkSchedule::from_days((1..=5).map(|d| day(d, &[("09:00", "18:00")])).collect())
}

/// Office week with a lunch break and slot settings
#[allow(dead_code)]
pub fn office_schedule() -> MasterSchedule {
    MasterSchedule::new(office_week())
        .with_break(workweek::schedule::Break::new("12:00", "13:00").with_reason("Lunch"))
        .with_buffer_minutes(Some(15))
        .with_slot_step_minutes(Some(15))
}

/// Sorted day-of-week numbers present in a schedule
#[allow(dead_code)]
pub fn day_numbers(schedule: &WorkSchedule) -> Vec<u8> {
    let mut days: Vec<u8> = schedule.days().iter().map(|d| d.day_of_week.index()).collect();
    days.sort_unstable();
    days
}
