//! Transport layer for the minion service.
//!
//! The service speaks HTTP only. Listener settings live in [`HttpConfig`];
//! the axum router and its request wrappers are compiled with the `server`
//! feature.

mod config;
mod error;

#[cfg(feature = "server")]
pub mod http;

#[cfg(feature = "server")]
pub mod middleware;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};

#[cfg(feature = "server")]
pub use http::{HttpTransport, build_router};
