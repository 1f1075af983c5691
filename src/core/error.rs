//! Error types and handling for the minion service.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and the transport, providing consistent error handling
//! across the entire application.

use thiserror::Error;

/// A specialized Result type for minion service operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the minion service.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the minion store.
    #[error("Minion error: {0}")]
    Minion(#[from] crate::domains::minions::MinionError),

    /// Error originating from the HTTP transport.
    #[error("Transport error: {0}")]
    Transport(#[from] crate::core::transport::TransportError),

    /// Error originating from the HTTP client.
    #[cfg(feature = "client")]
    #[error("Client error: {0}")]
    Client(#[from] crate::domains::client::ClientError),

    /// Error originating from the provider adapter.
    #[cfg(feature = "client")]
    #[error("Provider error: {0}")]
    Provider(#[from] crate::domains::provider::ProviderError),
}
