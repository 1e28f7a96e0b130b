//! Pattern Lab Core - engine for an interactive coding-pattern learning tool
//!
//! This crate provides the non-UI core: a static catalog of learning patterns
//! (starter/solution code with declared test cases) and a gamified progression
//! engine (XP, levels, achievements) persisted to a single local slot. Running
//! learner code is an external collaborator's job; the engine only consumes
//! the resulting pass/fail reports.

pub mod catalog;
pub mod error;
pub mod progress;
pub mod store;

use crate::catalog::{PatternCatalog, TestReport};
use crate::error::Result;
use crate::progress::ProgressionEngine;
use crate::store::ProgressStore;

/// Application composition root: the catalog and the progression engine,
/// owned together and passed by handle to whoever needs them.
pub struct AppContext<S: ProgressStore> {
    pub catalog: PatternCatalog,
    pub engine: ProgressionEngine<S>,
}

impl<S: ProgressStore> AppContext<S> {
    /// Context with the built-in catalog and fresh progress.
    pub fn new(store: S) -> Self {
        Self {
            catalog: PatternCatalog::new(catalog::builtin_patterns()),
            engine: ProgressionEngine::new(store),
        }
    }

    /// Like [`AppContext::new`], but restores previously saved progress from
    /// the store before handing the context back.
    pub fn open(store: S) -> Result<Self> {
        let mut context = Self::new(store);
        context.engine.load_progress()?;
        Ok(context)
    }

    /// Record the outcome of a sandbox run against a pattern's test cases.
    ///
    /// Completes the pattern with its catalog XP reward when every report
    /// passed. Returns whether a completion was newly recorded; an unknown
    /// pattern id, an empty run or any failed test records nothing.
    pub fn record_run(&mut self, pattern_id: &str, reports: &[TestReport]) -> Result<bool> {
        if reports.is_empty() || reports.iter().any(|report| !report.passed) {
            return Ok(false);
        }
        let xp_reward = match self.catalog.get_by_id(pattern_id) {
            Some(pattern) => pattern.xp_reward as u64,
            None => return Ok(false),
        };
        self.engine.complete_pattern(pattern_id, xp_reward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn passing(test_id: &str) -> TestReport {
        TestReport {
            test_id: test_id.to_string(),
            passed: true,
            actual_output: None,
            expected_output: None,
            error: None,
        }
    }

    fn failing(test_id: &str) -> TestReport {
        TestReport {
            passed: false,
            ..passing(test_id)
        }
    }

    #[test]
    fn test_record_run_completes_on_all_pass() {
        let mut context = AppContext::new(MemoryStore::new());
        let recorded = context
            .record_run("singleton", &[passing("test-1"), passing("test-2")])
            .unwrap();

        assert!(recorded);
        assert_eq!(context.engine.progress().total_xp, 50);
        assert!(context
            .engine
            .progress()
            .completed_patterns
            .contains(&"singleton".to_string()));
    }

    #[test]
    fn test_record_run_rejects_failed_test() {
        let mut context = AppContext::new(MemoryStore::new());
        let recorded = context
            .record_run("singleton", &[passing("test-1"), failing("test-2")])
            .unwrap();

        assert!(!recorded);
        assert_eq!(context.engine.progress().total_xp, 0);
    }

    #[test]
    fn test_record_run_rejects_empty_run_and_unknown_pattern() {
        let mut context = AppContext::new(MemoryStore::new());
        assert!(!context.record_run("singleton", &[]).unwrap());
        assert!(!context
            .record_run("no-such-pattern", &[passing("test-1")])
            .unwrap());
    }

    #[test]
    fn test_record_run_is_idempotent() {
        let mut context = AppContext::new(MemoryStore::new());
        let reports = [passing("test-1"), passing("test-2")];

        assert!(context.record_run("singleton", &reports).unwrap());
        assert!(!context.record_run("singleton", &reports).unwrap());
        assert_eq!(context.engine.progress().total_xp, 50);
    }

    #[test]
    fn test_open_restores_saved_progress() {
        let store = MemoryStore::new();
        {
            let mut context = AppContext::new(store.clone());
            context.engine.add_xp(75).unwrap();
            context
                .record_run("singleton", &[passing("test-1"), passing("test-2")])
                .unwrap();
        }

        let context = AppContext::open(store).unwrap();
        assert_eq!(context.engine.progress().total_xp, 125);
        assert!(context
            .engine
            .progress()
            .completed_patterns
            .contains(&"singleton".to_string()));
    }
}
