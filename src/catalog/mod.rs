//! Pattern catalog module
//!
//! Static learning content: patterns with starter/solution code and declared
//! test cases, plus lookup and selection over them.

mod builtin;
mod pattern;
mod provider;

pub use builtin::*;
pub use pattern::*;
pub use provider::*;
