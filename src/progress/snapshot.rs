//! Persisted progress layout and lenient decoding
//!
//! The saved blob is a single JSON object: `totalXp`, `level`,
//! `completedPatterns`, `achievements`. There is no version field; decoding
//! defaults each field independently so one bad field never invalidates the
//! whole record.

use crate::error::{PatternLabError, Result};
use crate::progress::{Achievement, UserProgress};
use ahash::AHashMap;
use serde::Serialize;
use serde_json::Value;

/// Fixed name of the single persisted slot.
pub const STORAGE_KEY: &str = "userProgress";

/// Serializable view of the aggregate, in the persisted field layout.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot<'a> {
    total_xp: u64,
    level: u32,
    completed_patterns: &'a [String],
    achievements: &'a [Achievement],
}

impl<'a> ProgressSnapshot<'a> {
    pub fn of(progress: &'a UserProgress) -> Self {
        Self {
            total_xp: progress.total_xp,
            level: progress.level,
            completed_patterns: &progress.completed_patterns,
            achievements: &progress.achievements,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| PatternLabError::Persistence(e.to_string()))
    }
}

/// Apply a saved blob onto the aggregate, field by field.
///
/// A wholly unparsable blob is treated like an absent slot: the aggregate is
/// left untouched. Otherwise every field is decoded independently with its
/// default (`totalXp` 0, `level` 1, `completedPatterns` empty), and
/// achievements are merged by id: a loaded entry replaces the current one
/// verbatim when ids match, the current entry stays otherwise, and loaded ids
/// unknown to the current list are dropped.
pub fn apply_snapshot(progress: &mut UserProgress, raw: &str) {
    let data: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("discarding unparsable saved progress: {}", e);
            return;
        }
    };

    progress.total_xp = data.get("totalXp").and_then(Value::as_u64).unwrap_or(0);

    progress.level = data
        .get("level")
        .and_then(Value::as_u64)
        .filter(|&level| level >= 1)
        .map(|level| level.min(u32::MAX as u64) as u32)
        .unwrap_or(1);

    progress.completed_patterns = data
        .get("completedPatterns")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    if let Some(saved) = data.get("achievements").and_then(Value::as_array) {
        let loaded = decode_achievements(saved);
        merge_achievements(&mut progress.achievements, loaded);
    }
}

/// Decode saved achievement entries, skipping any that fail to parse.
fn decode_achievements(saved: &[Value]) -> Vec<Achievement> {
    saved
        .iter()
        .filter_map(|entry| match serde_json::from_value(entry.clone()) {
            Ok(achievement) => Some(achievement),
            Err(e) => {
                log::warn!("skipping malformed saved achievement: {}", e);
                None
            }
        })
        .collect()
}

/// Merge loaded achievements into the current list by id. Loaded wins when
/// ids match; the current entry stays otherwise. Order follows the current
/// list, so loaded entries with unknown ids vanish.
fn merge_achievements(current: &mut [Achievement], loaded: Vec<Achievement>) {
    let mut by_id: AHashMap<String, Achievement> = loaded
        .into_iter()
        .map(|achievement| (achievement.id.clone(), achievement))
        .collect();

    for slot in current.iter_mut() {
        if let Some(saved) = by_id.remove(&slot.id) {
            *slot = saved;
        }
    }
}
