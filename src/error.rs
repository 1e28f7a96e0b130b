//! Error types for the pattern lab core engine

use thiserror::Error;

/// Main error type for the pattern lab core engine
#[derive(Error, Debug)]
pub enum PatternLabError {
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Result type alias for the pattern lab core engine
pub type Result<T> = std::result::Result<T, PatternLabError>;
