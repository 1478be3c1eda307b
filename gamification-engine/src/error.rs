//! Error types for gamification engine

use thiserror::Error;

/// Gamification engine error
#[derive(Debug, Error)]
pub enum Error {
    /// Input rejected before applying
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid catalog configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
