//! Provider-specific error types.

use thiserror::Error;

use crate::domains::client::ClientError;

/// Errors that can occur while driving minion resources.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// A provider setting is missing or malformed.
    #[error("provider configuration error: {0}")]
    Config(String),

    /// The resource name failed validation.
    #[error("name cannot contain whitespace. Got {0}")]
    InvalidName(String),

    /// A resource lookup failed for a reason other than absence.
    #[error("error finding Minion with ID {0}")]
    Lookup(String),

    /// The underlying client call failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ProviderError {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
