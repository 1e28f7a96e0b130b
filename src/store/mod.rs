//! Persistence surface: a single serialized slot behind a small trait

mod file;
mod memory;

pub use file::*;
pub use memory::*;

use crate::error::Result;

/// A durable single-slot store for the serialized progress blob.
///
/// One logical writer, last-writer-wins; no merging or versioning. An absent
/// slot reads as `None`.
pub trait ProgressStore {
    fn read(&self) -> Result<Option<String>>;
    fn write(&mut self, payload: &str) -> Result<()>;
}
