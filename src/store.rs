//! File-backed schedule storage
//!
//! The schedule is loaded whole, edited in memory and written back whole on save.
//! There is no locking: the last writer wins.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::schedule::{validate_schedule, MasterSchedule};

/// JSON document store for a single [`MasterSchedule`]
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    path: PathBuf,
}

impl ScheduleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored schedule, or the empty schedule when no file exists yet
    pub async fn load(&self) -> Result<MasterSchedule> {
        if !tokio::fs::try_exists(&self.path).await? {
            tracing::debug!(path = %self.path.display(), "No stored schedule, starting empty");
            return Ok(MasterSchedule::default());
        }

        let json = tokio::fs::read_to_string(&self.path).await?;
        let schedule = MasterSchedule::from_json(&json)?;
        tracing::debug!(
            path = %self.path.display(),
            days = schedule.work_schedule.len(),
            "Schedule loaded"
        );
        Ok(schedule)
    }

    /// Write the schedule as-is
    pub async fn save(&self, schedule: &MasterSchedule) -> Result<()> {
        let json = schedule.to_json()?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, json).await?;

        tracing::info!(path = %self.path.display(), "Schedule saved");
        Ok(())
    }

    /// Write the schedule only if it passes validation
    pub async fn save_validated(&self, schedule: &MasterSchedule) -> Result<()> {
        let result = validate_schedule(schedule);
        if !result.valid {
            let reason = result.error.unwrap_or_default();
            tracing::warn!(reason = %reason, "Refusing to save invalid schedule");
            return Err(Error::rejected(reason));
        }
        self.save(schedule).await
    }
}
