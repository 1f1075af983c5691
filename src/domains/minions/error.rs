//! Minion store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum MinionError {
    /// The minion is malformed (e.g. whitespace in its name).
    #[error("{0}")]
    Invalid(String),

    /// A minion with this name already exists.
    #[error("duplicate alert!!! {0} ")]
    Conflict(String),

    /// No minion with this name exists.
    #[error("minion {0} does not exist")]
    NotFound(String),

    /// The seed file could not be read.
    #[error("failed to read seed file: {0}")]
    SeedIo(#[from] std::io::Error),

    /// The seed file is not a JSON object of minions.
    #[error("failed to parse seed file: {0}")]
    SeedJson(#[from] serde_json::Error),
}

impl MinionError {
    /// Create a new "invalid" error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    /// Create a new "conflict" error.
    pub fn conflict(name: impl Into<String>) -> Self {
        Self::Conflict(name.into())
    }

    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// HTTP status code this error maps to by default.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Invalid(_) | Self::Conflict(_) => 400,
            Self::NotFound(_) => 404,
            Self::SeedIo(_) | Self::SeedJson(_) => 500,
        }
    }
}
