//! Pattern catalog lookup and selection

use crate::catalog::{Category, Difficulty, Pattern};
use crate::error::{PatternLabError, Result};
use ahash::AHashMap;

/// Immutable pattern catalog with an id index and a single selection slot.
///
/// Lookups never fail: an unknown id yields `None`, an unmatched filter yields
/// an empty list. The only mutable state is the current-pattern pointer.
#[derive(Debug)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
    index: AHashMap<String, usize>,
    current: Option<usize>,
}

impl PatternCatalog {
    /// Build a catalog from authored patterns, preserving authoring order.
    pub fn new(patterns: Vec<Pattern>) -> Self {
        let mut index = AHashMap::with_capacity(patterns.len());
        for (pos, pattern) in patterns.iter().enumerate() {
            index.insert(pattern.id.clone(), pos);
        }
        Self {
            patterns,
            index,
            current: None,
        }
    }

    /// Load and validate a catalog from authored JSON.
    ///
    /// Rejects malformed documents, duplicate pattern ids and non-positive
    /// XP rewards; content fields are taken as-is.
    pub fn from_json(json: &str) -> Result<Self> {
        let patterns: Vec<Pattern> = serde_json::from_str(json)
            .map_err(|e| PatternLabError::InvalidCatalog(e.to_string()))?;

        let mut seen = AHashMap::with_capacity(patterns.len());
        for pattern in &patterns {
            if seen.insert(pattern.id.clone(), ()).is_some() {
                return Err(PatternLabError::InvalidCatalog(format!(
                    "duplicate pattern id: {}",
                    pattern.id
                )));
            }
            if pattern.xp_reward == 0 {
                return Err(PatternLabError::InvalidCatalog(format!(
                    "pattern {} has zero xp reward",
                    pattern.id
                )));
            }
        }

        Ok(Self::new(patterns))
    }

    /// All patterns in authoring order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Look up a pattern by id.
    pub fn get_by_id(&self, id: &str) -> Option<&Pattern> {
        self.index.get(id).map(|&pos| &self.patterns[pos])
    }

    /// All patterns in a category, in authoring order.
    pub fn get_by_category(&self, category: Category) -> Vec<&Pattern> {
        self.patterns
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// All patterns at a difficulty, in authoring order.
    pub fn get_by_difficulty(&self, difficulty: Difficulty) -> Vec<&Pattern> {
        self.patterns
            .iter()
            .filter(|p| p.difficulty == difficulty)
            .collect()
    }

    /// Point the selection slot at a pattern, or clear it when the id is
    /// unknown. Never an error.
    pub fn set_current(&mut self, id: &str) {
        self.current = self.index.get(id).copied();
    }

    /// The currently selected pattern, if any.
    pub fn current(&self) -> Option<&Pattern> {
        self.current.map(|pos| &self.patterns[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_patterns;

    fn catalog() -> PatternCatalog {
        PatternCatalog::new(builtin_patterns())
    }

    #[test]
    fn test_get_by_id() {
        let catalog = catalog();
        assert!(catalog.get_by_id("singleton").is_some());
        assert!(catalog.get_by_id("no-such-pattern").is_none());
    }

    #[test]
    fn test_get_by_category_preserves_order() {
        let catalog = catalog();
        let dsa = catalog.get_by_category(Category::Dsa);
        assert_eq!(dsa.len(), 1);
        assert_eq!(dsa[0].id, "binary-search");

        let all: Vec<&str> = catalog.patterns().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(all, vec!["singleton", "binary-search", "linear-regression"]);
    }

    #[test]
    fn test_get_by_difficulty() {
        let catalog = catalog();
        let beginner = catalog.get_by_difficulty(Difficulty::Beginner);
        assert_eq!(beginner.len(), 2);

        let advanced = catalog.get_by_difficulty(Difficulty::Advanced);
        assert!(advanced.is_empty());
    }

    #[test]
    fn test_set_current_unknown_id_clears() {
        let mut catalog = catalog();
        catalog.set_current("singleton");
        assert_eq!(catalog.current().unwrap().id, "singleton");

        catalog.set_current("no-such-pattern");
        assert!(catalog.current().is_none());
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"[
            {"id": "a", "title": "A", "category": "dsa", "difficulty": "beginner",
             "description": "", "xpReward": 10, "starterCode": "", "solution": "",
             "testCases": []},
            {"id": "a", "title": "A again", "category": "dsa", "difficulty": "beginner",
             "description": "", "xpReward": 10, "starterCode": "", "solution": "",
             "testCases": []}
        ]"#;
        let err = PatternCatalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate pattern id"));
    }

    #[test]
    fn test_from_json_rejects_zero_reward() {
        let json = r#"[
            {"id": "a", "title": "A", "category": "dsa", "difficulty": "beginner",
             "description": "", "xpReward": 0, "starterCode": "", "solution": "",
             "testCases": []}
        ]"#;
        assert!(PatternCatalog::from_json(json).is_err());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(PatternCatalog::from_json("not json").is_err());
    }
}
