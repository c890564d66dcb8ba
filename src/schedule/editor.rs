//! Single-day edits
//!
//! A day is either off (absent from the list) or working with at least one
//! interval:
//!
//! ```text
//!            toggle on (seeds 09:00-18:00)
//!   Off ───────────────────────────────────▶ Working(intervals)
//!    ▲                                          │  add / update / remove
//!    └──────────────────────────────────────────┘  while one remains
//!      toggle off, or remove the last interval
//! ```

use super::error::{ScheduleError, ScheduleResult};
use super::model::{DayOfWeek, DaySchedule, WorkInterval, WorkSchedule};

/// Switch a day on or off
///
/// Switching on an already working day leaves its intervals as they are.
pub fn toggle_day(current: &WorkSchedule, day: DayOfWeek, on: bool) -> WorkSchedule {
    match (on, current.is_working(day)) {
        (true, false) => {
            tracing::debug!(%day, "Day switched on");
            current.clone().with_day(DaySchedule::with_default_interval(day))
        }
        (false, true) => {
            tracing::debug!(%day, "Day switched off");
            current.clone().without_day(day)
        }
        _ => current.clone(),
    }
}

/// Append an interval, switching the day on if needed
pub fn add_interval(current: &WorkSchedule, day: DayOfWeek, interval: WorkInterval) -> WorkSchedule {
    let mut intervals = current
        .day(day)
        .map(|d| d.intervals.clone())
        .unwrap_or_default();
    intervals.push(interval);
    current.clone().with_day(DaySchedule::new(day, intervals))
}

fn working_intervals(
    current: &WorkSchedule,
    day: DayOfWeek,
    index: usize,
) -> ScheduleResult<Vec<WorkInterval>> {
    current
        .day(day)
        .filter(|d| index < d.intervals.len())
        .map(|d| d.intervals.clone())
        .ok_or_else(|| ScheduleError::interval_not_found(day.index(), index))
}

/// Replace the interval at `index`
pub fn update_interval(
    current: &WorkSchedule,
    day: DayOfWeek,
    index: usize,
    interval: WorkInterval,
) -> ScheduleResult<WorkSchedule> {
    let mut intervals = working_intervals(current, day, index)?;
    intervals[index] = interval;
    Ok(current.clone().with_day(DaySchedule::new(day, intervals)))
}

/// Remove the interval at `index`; removing the last one switches the day off
pub fn remove_interval(
    current: &WorkSchedule,
    day: DayOfWeek,
    index: usize,
) -> ScheduleResult<WorkSchedule> {
    let mut intervals = working_intervals(current, day, index)?;
    intervals.remove(index);

    if intervals.is_empty() {
        tracing::debug!(%day, "Last interval removed, day switched off");
        return Ok(current.clone().without_day(day));
    }
    Ok(current.clone().with_day(DaySchedule::new(day, intervals)))
}
