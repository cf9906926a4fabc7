//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for EventStatus
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum EventStatusError {
    /// Event storage could not be reached or queried
    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl EventStatusError {
    /// Stable label suitable for structured logging fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Repository(_) => "repository",
            Self::Config(_) => "config",
            Self::InvalidInput(_) => "invalid_input",
        }
    }
}

/// Result type alias for EventStatus operations
pub type Result<T> = std::result::Result<T, EventStatusError>;
