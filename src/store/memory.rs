//! In-memory progress store for tests and benchmarks

use crate::error::Result;
use crate::store::ProgressStore;
use std::cell::RefCell;
use std::rc::Rc;

/// A shared in-process slot. Clones share the same slot, which lets a test
/// hand "the same storage" to a fresh engine the way a browser session would
/// see the same local store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&mut self, payload: &str) -> Result<()> {
        *self.slot.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}
