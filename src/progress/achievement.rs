//! Achievement definitions and the fixed seed set

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A named milestone flag. `unlocked` only ever flips false to true; the
/// timestamp records when that happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub requirement: u32,
    pub unlocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Achievement {
    fn locked(id: &str, title: &str, description: &str, icon: &str, requirement: u32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            requirement,
            unlocked: false,
            unlocked_at: None,
        }
    }
}

/// Fixed seed table, in display order. Only ids listed here are ever
/// auto-unlocked by the progression rules.
static SEED_ACHIEVEMENTS: Lazy<Vec<Achievement>> = Lazy::new(|| {
    vec![
        Achievement::locked("first-steps", "First Steps", "Complete your first pattern", "🎯", 1),
        Achievement::locked("pattern-master", "Pattern Master", "Complete 5 patterns", "🏆", 5),
        Achievement::locked("century-club", "Century Club", "Earn 100 XP", "💯", 100),
        Achievement::locked("level-five", "Rising Star", "Reach level 5", "⭐", 5),
    ]
});

/// A fresh copy of the seed set, everything locked.
pub fn seed_achievements() -> Vec<Achievement> {
    SEED_ACHIEVEMENTS.clone()
}
