//! Common utilities and helper functions
//!
//! Formatting and argument parsing shared by the summary output and the CLI.

use anyhow::{Context, Result};

use crate::schedule::WorkInterval;

/// Format a minute count as `7h 30m`
pub fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Parse a comma-separated interval list such as `09:00-13:00,14:00-18:00`
///
/// Each bound must be a valid `HH:MM`; ordering and overlap are left to validation.
pub fn parse_interval_list(input: &str) -> Result<Vec<WorkInterval>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (from, to) = part
                .split_once('-')
                .with_context(|| format!("Interval '{part}' must look like HH:MM-HH:MM"))?;
            WorkInterval::parse(from.trim(), to.trim())
                .with_context(|| format!("Invalid interval '{part}'"))
        })
        .collect()
}
