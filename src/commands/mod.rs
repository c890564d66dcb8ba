pub mod edit;
pub mod inspect;

use anyhow::Result;

use workweek::schedule::MasterSchedule;
use workweek::store::ScheduleStore;

// Re-export command functions for convenience
pub use edit::{edit, Edit};
pub use inspect::{show, validate};

/// Store access shared by every command
pub struct Session {
    store: ScheduleStore,
    validate_on_save: bool,
    dry_run: bool,
}

impl Session {
    pub fn new(store: ScheduleStore, validate_on_save: bool, dry_run: bool) -> Self {
        Self {
            store,
            validate_on_save,
            dry_run,
        }
    }

    pub async fn load(&self) -> Result<MasterSchedule> {
        Ok(self.store.load().await?)
    }

    /// Persist an edited schedule, or print it when running dry
    pub async fn commit(&self, schedule: &MasterSchedule) -> Result<()> {
        if self.dry_run {
            println!("{}", schedule.to_json()?);
            return Ok(());
        }

        if self.validate_on_save {
            self.store.save_validated(schedule).await?;
        } else {
            self.store.save(schedule).await?;
        }
        println!("Saved to {}", self.store.path().display());
        Ok(())
    }
}
