//! User progress aggregate and its mutation rules
//!
//! This is the deterministic reducer behind the progression engine: XP
//! accumulation, the level ratchet and the achievement unlock table. It knows
//! nothing about persistence.

use crate::progress::{seed_achievements, Achievement};
use chrono::{DateTime, Utc};

/// XP span of a single level.
pub const XP_PER_LEVEL: u64 = 100;

/// The learner's mutable progress aggregate. One writer at a time; all
/// mutation goes through the methods below.
#[derive(Debug, Clone)]
pub struct UserProgress {
    pub user_id: String,
    pub total_xp: u64,
    pub level: u32,
    pub completed_patterns: Vec<String>,
    pub achievements: Vec<Achievement>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self::new("user-1")
    }
}

impl UserProgress {
    /// Fresh progress: zero XP, level 1, nothing completed, seed achievements
    /// all locked.
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            total_xp: 0,
            level: 1,
            completed_patterns: Vec::new(),
            achievements: seed_achievements(),
        }
    }

    /// Add XP and run the downstream level and achievement checks.
    ///
    /// Returns the ids of achievements unlocked by this call. An amount of 0
    /// still runs the checks.
    pub fn grant_xp(&mut self, amount: u64, now: DateTime<Utc>) -> Vec<String> {
        self.total_xp = self.total_xp.saturating_add(amount);
        self.check_level_up();
        self.check_achievements(now)
    }

    /// Record a pattern completion and cascade its XP reward.
    ///
    /// Idempotent: a pattern already in the completed set is a complete no-op
    /// and returns `false`.
    pub fn record_completion(
        &mut self,
        pattern_id: &str,
        xp_reward: u64,
        now: DateTime<Utc>,
    ) -> bool {
        if self.completed_patterns.iter().any(|id| id == pattern_id) {
            return false;
        }
        self.completed_patterns.push(pattern_id.to_string());
        self.grant_xp(xp_reward, now);
        true
    }

    /// Level ratchet: `floor(total_xp / 100) + 1`, but the level never drops
    /// below its current value.
    fn check_level_up(&mut self) {
        let target = (self.total_xp / XP_PER_LEVEL)
            .saturating_add(1)
            .min(u32::MAX as u64) as u32;
        if target > self.level {
            log::info!("level up: {} -> {}", self.level, target);
            self.level = target;
        }
    }

    /// Re-evaluate the unlock table. Already-unlocked achievements are left
    /// untouched; ids not in the table stay however they were initialized.
    fn check_achievements(&mut self, now: DateTime<Utc>) -> Vec<String> {
        let completed = self.completed_patterns.len();
        let total_xp = self.total_xp;
        let level = self.level;

        let mut newly_unlocked = Vec::new();
        for achievement in &mut self.achievements {
            if achievement.unlocked {
                continue;
            }

            let achieved = match achievement.id.as_str() {
                "first-steps" => completed >= 1,
                "pattern-master" => completed >= 5,
                "century-club" => total_xp >= 100,
                "level-five" => level >= 5,
                _ => false,
            };

            if achieved {
                achievement.unlocked = true;
                achievement.unlocked_at = Some(now);
                log::info!("achievement unlocked: {}", achievement.id);
                newly_unlocked.push(achievement.id.clone());
            }
        }
        newly_unlocked
    }

    /// XP threshold of the current level's span (`level * 100`).
    ///
    /// Historical naming: this is the span threshold, not the absolute
    /// distance to the next level.
    pub fn xp_to_next_level(&self) -> u64 {
        self.level as u64 * XP_PER_LEVEL
    }

    /// Progress percentage within the current level:
    /// `((total_xp mod 100) / xp_to_next_level) * 100`.
    ///
    /// The denominator grows with the level while the numerator stays modulo
    /// 100; callers depend on exactly this scaling.
    pub fn current_level_progress(&self) -> f64 {
        let xp_in_current_level = self.total_xp % XP_PER_LEVEL;
        (xp_in_current_level as f64 / self.xp_to_next_level() as f64) * 100.0
    }

    /// Unlocked achievements in table order.
    pub fn unlocked_achievements(&self) -> Vec<&Achievement> {
        self.achievements.iter().filter(|a| a.unlocked).collect()
    }

    /// Still-locked achievements in table order.
    pub fn locked_achievements(&self) -> Vec<&Achievement> {
        self.achievements.iter().filter(|a| !a.unlocked).collect()
    }
}
