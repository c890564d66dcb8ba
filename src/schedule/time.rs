//! Time-of-day parsing and range comparison
//!
//! Wire values are naive local `HH:MM` strings. They are compared as
//! minutes since midnight, and every range is treated as half-open `[from, to)`
//! for overlap and closed for containment.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::error::{ScheduleError, ScheduleResult};

/// Minutes in a day
pub const MINUTES_PER_DAY: u16 = 24 * 60;

static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").unwrap());

// ============================================================================
// Time Of Day
// ============================================================================

/// A wall-clock time within a single day, stored as minutes since midnight (0..=1439)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build from hour and minute components
    pub fn from_hm(hour: u8, minute: u8) -> ScheduleResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::invalid_time(format!("{hour}:{minute}")));
        }
        Ok(Self(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Build from minutes since midnight
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Minutes since midnight
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_time(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

/// Parse a strict `HH:MM` string (hours 00-23, minutes 00-59, zero-padded)
pub fn parse_time(s: &str) -> ScheduleResult<TimeOfDay> {
    let caps = TIME_REGEX
        .captures(s)
        .ok_or_else(|| ScheduleError::invalid_time(s))?;

    // Both groups are two ASCII digits once the pattern matched
    let hour: u8 = caps[1].parse().map_err(|_| ScheduleError::invalid_time(s))?;
    let minute: u8 = caps[2].parse().map_err(|_| ScheduleError::invalid_time(s))?;

    TimeOfDay::from_hm(hour, minute)
}

/// True when `a` is strictly earlier than `b`
pub fn precedes(a: TimeOfDay, b: TimeOfDay) -> bool {
    a < b
}

// ============================================================================
// Span
// ============================================================================

/// A parsed `[from, to)` range used for every overlap and containment check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub from: TimeOfDay,
    pub to: TimeOfDay,
}

impl Span {
    pub fn new(from: TimeOfDay, to: TimeOfDay) -> Self {
        Self { from, to }
    }

    /// Parse both bounds, failing on the first malformed one
    pub fn parse(from: &str, to: &str) -> ScheduleResult<Self> {
        Ok(Self {
            from: parse_time(from)?,
            to: parse_time(to)?,
        })
    }

    /// `from < to`; zero-length and inverted ranges are not well ordered
    pub fn is_ordered(&self) -> bool {
        precedes(self.from, self.to)
    }

    /// Length in minutes, zero for inverted ranges
    pub fn duration_minutes(&self) -> u16 {
        self.to.minutes().saturating_sub(self.from.minutes())
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Half-open overlap: touching ranges (`a.to == b.from`) do not overlap
pub fn overlaps(a: &Span, b: &Span) -> bool {
    a.from < b.to && b.from < a.to
}

/// Inclusive containment of `inner` within `outer`
pub fn contains(outer: &Span, inner: &Span) -> bool {
    inner.from >= outer.from && inner.to <= outer.to
}
