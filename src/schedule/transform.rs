//! Bulk edits over the working week
//!
//! Each transform takes the current [`WorkSchedule`] and returns a new one.
//! Days a transform touches get their interval list replaced, never merged;
//! every other day is carried over verbatim. None of these validate: run
//! [`validate_schedule`](super::validation::validate_schedule) on the result.
//!
//! Date-based transforms work on weekday identity. Blocking out one Monday
//! removes Monday from the weekly pattern, which means every Monday.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use super::model::{DayOfWeek, DaySchedule, WorkInterval, WorkSchedule};

/// Intervals copied by the bulk transforms
///
/// The first day in list order (not the lowest day of week) provides the template
/// when it has at least one interval; otherwise 09:00-18:00.
pub fn template_intervals(current: &WorkSchedule) -> Vec<WorkInterval> {
    match current.days().first() {
        Some(first) if !first.intervals.is_empty() => first.intervals.clone(),
        _ => vec![WorkInterval::default_interval()],
    }
}

fn set_days(
    current: &WorkSchedule,
    days: impl IntoIterator<Item = DayOfWeek>,
    template: &[WorkInterval],
) -> WorkSchedule {
    days.into_iter().fold(current.clone(), |schedule, day| {
        schedule.with_day(DaySchedule::new(day, template.to_vec()))
    })
}

/// Set Monday-Friday to the template, leaving the weekend alone
pub fn apply_to_weekdays(current: &WorkSchedule) -> WorkSchedule {
    let template = template_intervals(current);
    tracing::debug!(intervals = template.len(), "Applying template to weekdays");
    set_days(current, DayOfWeek::weekdays(), &template)
}

/// Set all seven days to the template
pub fn apply_to_all_days(current: &WorkSchedule) -> WorkSchedule {
    let template = template_intervals(current);
    tracing::debug!(intervals = template.len(), "Applying template to all days");
    set_days(current, DayOfWeek::all(), &template)
}

/// Drop every working day
pub fn clear_all() -> WorkSchedule {
    WorkSchedule::NoSchedule
}

/// Set the weekday of `date` and every later weekday up to Saturday to `template`
///
/// A Wednesday sets Wednesday-Saturday and leaves Sunday-Tuesday untouched; the
/// range does not wrap into the next week. An empty `template` falls back to
/// [`template_intervals`].
pub fn apply_from_date(
    current: &WorkSchedule,
    date: NaiveDate,
    template: &[WorkInterval],
) -> WorkSchedule {
    let template = if template.is_empty() {
        template_intervals(current)
    } else {
        template.to_vec()
    };

    let start = DayOfWeek::from_date(date);
    tracing::debug!(%date, from_day = %start, "Applying template from date");

    set_days(
        current,
        DayOfWeek::all().filter(|day| *day >= start),
        &template,
    )
}

/// Weekdays hit by the calendar dates in `[start, end]`
pub fn weekdays_in_range(start: NaiveDate, end: NaiveDate) -> BTreeSet<DayOfWeek> {
    start
        .iter_days()
        .take_while(|date| *date <= end)
        .take(7)
        .map(DayOfWeek::from_date)
        .collect()
}

/// Remove every weekday that any date in `[start, end]` falls on
///
/// A span of seven days or more empties the schedule. An inverted range covers no
/// dates and returns the schedule unchanged.
pub fn block_out_range(current: &WorkSchedule, start: NaiveDate, end: NaiveDate) -> WorkSchedule {
    if start > end {
        tracing::warn!(%start, %end, "Block-out range ends before it starts, nothing removed");
        return current.clone();
    }

    let blocked = weekdays_in_range(start, end);
    tracing::debug!(%start, %end, blocked = blocked.len(), "Blocking out weekdays");

    current
        .clone()
        .retain_days(|day| !blocked.contains(&day.day_of_week))
}
