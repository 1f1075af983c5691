//! Core module containing shared infrastructure components.
//!
//! This module provides configuration, error handling, server assembly and
//! the HTTP transport.

pub mod config;
pub mod error;
pub mod transport;

#[cfg(feature = "server")]
pub mod server;

pub use config::Config;
pub use error::{Error, Result};
pub use transport::{HttpConfig, TransportError};

#[cfg(feature = "server")]
pub use server::MinionServer;
#[cfg(feature = "server")]
pub use transport::HttpTransport;
