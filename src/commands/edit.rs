use anyhow::Result;
use chrono::NaiveDate;

use workweek::schedule::{
    add_interval, apply_from_date, apply_to_all_days, apply_to_weekdays, block_out_range,
    clear_all, remove_interval, toggle_day, Break, DayOfWeek, MasterSchedule, WorkInterval,
};

use super::Session;

/// A single change requested from the command line
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    Weekdays,
    AllDays,
    Clear,
    FromDate {
        date: NaiveDate,
        template: Vec<WorkInterval>,
    },
    BlockOut {
        start: NaiveDate,
        end: NaiveDate,
    },
    Toggle {
        day: DayOfWeek,
        on: bool,
    },
    AddInterval {
        day: DayOfWeek,
        interval: WorkInterval,
    },
    RemoveInterval {
        day: DayOfWeek,
        index: usize,
    },
    AddBreak(Break),
    RemoveBreak {
        index: usize,
    },
    SetBuffer(Option<i64>),
    SetStep(Option<i64>),
}

/// Apply an edit to a loaded schedule
pub fn apply_edit(schedule: MasterSchedule, edit: &Edit) -> workweek::error::Result<MasterSchedule> {
    let week = &schedule.work_schedule;

    let updated = match edit {
        Edit::Weekdays => {
            let week = apply_to_weekdays(week);
            schedule.with_work_schedule(week)
        }
        Edit::AllDays => {
            let week = apply_to_all_days(week);
            schedule.with_work_schedule(week)
        }
        Edit::Clear => schedule.with_work_schedule(clear_all()),
        Edit::FromDate { date, template } => {
            let week = apply_from_date(week, *date, template);
            schedule.with_work_schedule(week)
        }
        Edit::BlockOut { start, end } => {
            let week = block_out_range(week, *start, *end);
            schedule.with_work_schedule(week)
        }
        Edit::Toggle { day, on } => {
            let week = toggle_day(week, *day, *on);
            schedule.with_work_schedule(week)
        }
        Edit::AddInterval { day, interval } => {
            let week = add_interval(week, *day, interval.clone());
            schedule.with_work_schedule(week)
        }
        Edit::RemoveInterval { day, index } => {
            let week = remove_interval(week, *day, *index)?;
            schedule.with_work_schedule(week)
        }
        Edit::AddBreak(brk) => schedule.with_break(brk.clone()),
        Edit::RemoveBreak { index } => schedule.without_break(*index)?,
        Edit::SetBuffer(minutes) => schedule.with_buffer_minutes(*minutes),
        Edit::SetStep(minutes) => schedule.with_slot_step_minutes(*minutes),
    };

    Ok(updated)
}

pub async fn edit(session: &Session, edit: Edit) -> Result<()> {
    let schedule = session.load().await?;
    let updated = apply_edit(schedule, &edit)?;

    tracing::debug!(
        days = updated.work_schedule.len(),
        breaks = updated.breaks().len(),
        "Edit applied"
    );
    session.commit(&updated).await
}
