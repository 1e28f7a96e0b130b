//! Progression engine module
//!
//! The learner's mutable state (XP, level, completions, achievements), the
//! rules that derive level and unlocks from it, and its persistence.

mod achievement;
mod engine;
mod snapshot;
mod state;


pub use achievement::*;
pub use engine::*;
pub use snapshot::*;
pub use state::*;
