//! Minion Service Library
//!
//! An in-memory store of "minions" (name, description, tags) served over an
//! authenticated HTTP API, plus the client and provider adapter that drive it.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, server assembly and the HTTP transport
//! - **domains**: business logic organized by bounded contexts
//!   - **minions**: the record, the lock-guarded store and the HTTP handlers
//!   - **client**: HTTP client for the `/minion` API
//!   - **provider**: resource lifecycle adapter built on the client
//!
//! # Example
//!
//! ```rust,no_run
//! use minion_service::core::{Config, MinionServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = MinionServer::new(config)?;
//!     server.run().await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result};
pub use domains::minions::{Minion, MinionError, MinionStore};

#[cfg(feature = "server")]
pub use core::MinionServer;

#[cfg(feature = "client")]
pub use domains::client::{ClientError, MinionApi, MinionClient};
