//! Progression engine: actions over the aggregate plus persistence

use crate::error::Result;
use crate::progress::{apply_snapshot, ProgressSnapshot, UserProgress};
use crate::store::ProgressStore;
use chrono::Utc;

/// Owns the learner's progress and the store it persists to. Constructed
/// explicitly and passed by handle; there is no hidden global instance.
pub struct ProgressionEngine<S: ProgressStore> {
    progress: UserProgress,
    store: S,
}

impl<S: ProgressStore> ProgressionEngine<S> {
    /// Engine with fresh default progress.
    pub fn new(store: S) -> Self {
        Self {
            progress: UserProgress::default(),
            store,
        }
    }

    /// Read-only view of the aggregate.
    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    /// Add XP, run the level/achievement checks, then persist.
    ///
    /// The in-memory mutation stands even when the trailing persist fails;
    /// the persistence failure is the returned error.
    pub fn add_xp(&mut self, amount: u64) -> Result<()> {
        self.progress.grant_xp(amount, Utc::now());
        self.save_progress()
    }

    /// Record a completion and cascade its XP reward, persisting the result.
    ///
    /// Returns whether the completion was newly recorded; an already-completed
    /// pattern is a complete no-op, including persistence.
    pub fn complete_pattern(&mut self, pattern_id: &str, xp_reward: u64) -> Result<bool> {
        if !self
            .progress
            .record_completion(pattern_id, xp_reward, Utc::now())
        {
            return Ok(false);
        }
        self.save_progress()?;
        Ok(true)
    }

    /// Serialize the whole aggregate into the store slot, overwriting any
    /// prior value.
    pub fn save_progress(&mut self) -> Result<()> {
        let payload = ProgressSnapshot::of(&self.progress).to_json()?;
        self.store.write(&payload)?;
        log::debug!("saved progress: {} xp, level {}", self.progress.total_xp, self.progress.level);
        Ok(())
    }

    /// Load the store slot into the aggregate. An absent slot leaves the
    /// current state unchanged; a malformed blob is recovered field by field.
    pub fn load_progress(&mut self) -> Result<()> {
        match self.store.read()? {
            Some(raw) => {
                apply_snapshot(&mut self.progress, &raw);
                log::debug!(
                    "loaded progress: {} xp, level {}",
                    self.progress.total_xp,
                    self.progress.level
                );
            }
            None => log::debug!("no saved progress found"),
        }
        Ok(())
    }
}
