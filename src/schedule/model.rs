//! Schedule data model
//!
//! These types mirror the wire document exchanged with the persistence layer:
//!
//! ```text
//! WorkInterval   = { from: "HH:MM", to: "HH:MM" }
//! DaySchedule    = { dayOfWeek: 0..6, intervals: [WorkInterval, ...] }
//! Break          = { from: "HH:MM", to: "HH:MM", reason?: string }
//! MasterSchedule = { workSchedule, breaks, defaultBufferMinutes, slotStepMinutes }
//! ```
//!
//! Time bounds stay as strings so that a malformed document still loads and can
//! be reported by validation instead of failing at parse time.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{ScheduleError, ScheduleResult};
use super::time::{contains, Span};

/// Start of the interval seeded when a day is switched on
pub const DEFAULT_INTERVAL_FROM: &str = "09:00";

/// End of the interval seeded when a day is switched on
pub const DEFAULT_INTERVAL_TO: &str = "18:00";

// ============================================================================
// Day Of Week
// ============================================================================

/// Day of week, 0 = Sunday through 6 = Saturday
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub const SUNDAY: Self = Self(0);
    pub const MONDAY: Self = Self(1);
    pub const TUESDAY: Self = Self(2);
    pub const WEDNESDAY: Self = Self(3);
    pub const THURSDAY: Self = Self(4);
    pub const FRIDAY: Self = Self(5);
    pub const SATURDAY: Self = Self(6);

    /// Create from a numeric day, failing outside 0-6
    pub fn new(value: u8) -> ScheduleResult<Self> {
        if value > 6 {
            return Err(ScheduleError::invalid_day(value));
        }
        Ok(Self(value))
    }

    /// Weekday a calendar date falls on
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.weekday().num_days_from_sunday() as u8)
    }

    /// All seven days, Sunday first
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=6).map(Self)
    }

    /// Monday through Friday
    pub fn weekdays() -> impl Iterator<Item = Self> {
        (1..=5).map(Self)
    }

    /// Numeric value (0 = Sunday)
    pub fn index(self) -> u8 {
        self.0
    }

    /// English day name
    pub fn name(self) -> &'static str {
        match self.0 {
            0 => "Sunday",
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            _ => "Saturday",
        }
    }

    /// Three-letter abbreviation
    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = ScheduleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.0
    }
}

// ============================================================================
// Work Interval
// ============================================================================

/// A working period within a single day
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkInterval {
    pub from: String,
    pub to: String,
}

impl WorkInterval {
    /// Create without checking the bounds
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create from bounds that must both be well-formed `HH:MM`
    pub fn parse(from: &str, to: &str) -> ScheduleResult<Self> {
        Ok(Span::parse(from, to)?.into())
    }

    /// The interval seeded for a newly enabled day (09:00-18:00)
    pub fn default_interval() -> Self {
        Self::new(DEFAULT_INTERVAL_FROM, DEFAULT_INTERVAL_TO)
    }

    /// Parsed bounds
    pub fn span(&self) -> ScheduleResult<Span> {
        Span::parse(&self.from, &self.to)
    }
}

impl From<Span> for WorkInterval {
    fn from(span: Span) -> Self {
        Self::new(span.from.to_string(), span.to.to_string())
    }
}

impl fmt::Display for WorkInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

// ============================================================================
// Day Schedule
// ============================================================================

/// Working intervals for one day of the week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub day_of_week: DayOfWeek,
    pub intervals: Vec<WorkInterval>,
}

impl DaySchedule {
    pub fn new(day_of_week: DayOfWeek, intervals: Vec<WorkInterval>) -> Self {
        Self {
            day_of_week,
            intervals,
        }
    }

    /// A working day with the single default interval
    pub fn with_default_interval(day_of_week: DayOfWeek) -> Self {
        Self::new(day_of_week, vec![WorkInterval::default_interval()])
    }
}

// ============================================================================
// Break
// ============================================================================

/// A recurring pause applied to every working day whose intervals contain it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Break {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Parsed bounds
    pub fn span(&self) -> ScheduleResult<Span> {
        Span::parse(&self.from, &self.to)
    }
}

// ============================================================================
// Work Schedule
// ============================================================================

/// The set of working days
///
/// "No working days" is its own variant; a `Schedule` never holds an empty list.
/// On the wire this is `null` or a non-empty array, and an empty array loads as
/// [`WorkSchedule::NoSchedule`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Vec<DaySchedule>>", into = "Option<Vec<DaySchedule>>")]
pub enum WorkSchedule {
    #[default]
    NoSchedule,
    Schedule(Vec<DaySchedule>),
}

impl WorkSchedule {
    /// Build from a list of days, collapsing an empty list to `NoSchedule`
    pub fn from_days(days: Vec<DaySchedule>) -> Self {
        if days.is_empty() {
            Self::NoSchedule
        } else {
            Self::Schedule(days)
        }
    }

    /// Days in insertion order
    pub fn days(&self) -> &[DaySchedule] {
        match self {
            Self::NoSchedule => &[],
            Self::Schedule(days) => days,
        }
    }

    pub fn into_days(self) -> Vec<DaySchedule> {
        match self {
            Self::NoSchedule => Vec::new(),
            Self::Schedule(days) => days,
        }
    }

    pub fn day(&self, day_of_week: DayOfWeek) -> Option<&DaySchedule> {
        self.days().iter().find(|d| d.day_of_week == day_of_week)
    }

    pub fn is_working(&self, day_of_week: DayOfWeek) -> bool {
        self.day(day_of_week).is_some()
    }

    /// Number of working days
    pub fn len(&self) -> usize {
        self.days().len()
    }

    pub fn is_empty(&self) -> bool {
        self.days().is_empty()
    }

    /// Insert or replace a day. Replaced days keep their list position; new days go last.
    pub fn with_day(self, day: DaySchedule) -> Self {
        let mut days = self.into_days();
        match days.iter_mut().find(|d| d.day_of_week == day.day_of_week) {
            Some(existing) => *existing = day,
            None => days.push(day),
        }
        Self::from_days(days)
    }

    /// Drop a day (no-op when it is already off)
    pub fn without_day(self, day_of_week: DayOfWeek) -> Self {
        self.retain_days(|d| d.day_of_week != day_of_week)
    }

    /// Keep only days matching the predicate
    pub fn retain_days(self, keep: impl FnMut(&DaySchedule) -> bool) -> Self {
        let mut days = self.into_days();
        days.retain(keep);
        Self::from_days(days)
    }

    /// Every interval from every day, day identity discarded
    pub fn all_intervals(&self) -> impl Iterator<Item = &WorkInterval> {
        self.days().iter().flat_map(|d| d.intervals.iter())
    }
}

impl From<Option<Vec<DaySchedule>>> for WorkSchedule {
    fn from(days: Option<Vec<DaySchedule>>) -> Self {
        Self::from_days(days.unwrap_or_default())
    }
}

impl From<WorkSchedule> for Option<Vec<DaySchedule>> {
    fn from(schedule: WorkSchedule) -> Self {
        match schedule {
            WorkSchedule::NoSchedule => None,
            WorkSchedule::Schedule(days) => Some(days),
        }
    }
}

// ============================================================================
// Master Schedule
// ============================================================================

/// The whole availability document loaded from and saved to the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasterSchedule {
    pub work_schedule: WorkSchedule,
    pub breaks: Option<Vec<Break>>,
    /// Gap kept after each appointment (10-30 when set)
    pub default_buffer_minutes: Option<i64>,
    /// Granularity of generated slot start times (5, 10 or 15 when set)
    pub slot_step_minutes: Option<i64>,
}

impl MasterSchedule {
    pub fn new(work_schedule: WorkSchedule) -> Self {
        Self {
            work_schedule,
            ..Default::default()
        }
    }

    pub fn with_work_schedule(mut self, work_schedule: WorkSchedule) -> Self {
        self.work_schedule = work_schedule;
        self
    }

    pub fn with_buffer_minutes(mut self, minutes: Option<i64>) -> Self {
        self.default_buffer_minutes = minutes;
        self
    }

    pub fn with_slot_step_minutes(mut self, minutes: Option<i64>) -> Self {
        self.slot_step_minutes = minutes;
        self
    }

    /// Breaks in list order (empty when none are configured)
    pub fn breaks(&self) -> &[Break] {
        self.breaks.as_deref().unwrap_or_default()
    }

    /// Append a break
    pub fn with_break(mut self, brk: Break) -> Self {
        self.breaks.get_or_insert_with(Vec::new).push(brk);
        self
    }

    /// Remove the break at `index`; removing the last one clears the list to `None`
    pub fn without_break(mut self, index: usize) -> ScheduleResult<Self> {
        let len = self.breaks().len();
        let breaks = match self.breaks.as_mut() {
            Some(breaks) if index < breaks.len() => breaks,
            _ => return Err(ScheduleError::break_not_found(index, len)),
        };
        breaks.remove(index);
        if breaks.is_empty() {
            self.breaks = None;
        }
        Ok(self)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> crate::error::Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Per-day working time, net of breaks
    pub fn summary(&self) -> ScheduleSummary {
        let break_spans: Vec<Span> = self.breaks().iter().filter_map(|b| b.span().ok()).collect();

        let days = self
            .work_schedule
            .days()
            .iter()
            .map(|day| {
                let spans: Vec<Span> = day.intervals.iter().filter_map(|i| i.span().ok()).collect();
                let worked: u32 = spans.iter().map(|s| u32::from(s.duration_minutes())).sum();
                let paused: u32 = break_spans
                    .iter()
                    .filter(|b| spans.iter().any(|s| contains(s, b)))
                    .map(|b| u32::from(b.duration_minutes()))
                    .sum();

                DaySummary {
                    day_of_week: day.day_of_week,
                    intervals: day.intervals.iter().map(ToString::to_string).collect(),
                    working_minutes: worked.saturating_sub(paused),
                }
            })
            .collect();

        ScheduleSummary {
            days,
            break_count: self.breaks().len(),
            default_buffer_minutes: self.default_buffer_minutes,
            slot_step_minutes: self.slot_step_minutes,
        }
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Working time for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub day_of_week: DayOfWeek,
    pub intervals: Vec<String>,
    pub working_minutes: u32,
}

/// Schedule summary statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSummary {
    pub days: Vec<DaySummary>,
    pub break_count: usize,
    pub default_buffer_minutes: Option<i64>,
    pub slot_step_minutes: Option<i64>,
}

impl ScheduleSummary {
    pub fn working_days(&self) -> usize {
        self.days.len()
    }

    pub fn weekly_minutes(&self) -> u32 {
        self.days.iter().map(|d| d.working_minutes).sum()
    }

    /// Format as display string, days sorted Sunday first
    pub fn display(&self) -> String {
        if self.days.is_empty() {
            return String::from("No working days configured\n");
        }

        let mut days: Vec<&DaySummary> = self.days.iter().collect();
        days.sort_by_key(|d| d.day_of_week);

        let mut output = String::from("Weekly Availability\n");
        output.push_str(&format!("{:-<40}\n", ""));
        for day in days {
            output.push_str(&format!(
                "{:<10} {:<24} {}\n",
                day.day_of_week.name(),
                day.intervals.join(", "),
                crate::utils::format_minutes(day.working_minutes)
            ));
        }
        output.push_str(&format!("{:-<40}\n", ""));
        output.push_str(&format!(
            "Working days: {} | Weekly total: {}\n",
            self.working_days(),
            crate::utils::format_minutes(self.weekly_minutes())
        ));
        output.push_str(&format!("Breaks: {}\n", self.break_count));
        if let Some(buffer) = self.default_buffer_minutes {
            output.push_str(&format!("Buffer: {buffer} min\n"));
        }
        if let Some(step) = self.slot_step_minutes {
            output.push_str(&format!("Slot step: {step} min\n"));
        }
        output
    }
}
