//! Provider domain module.
//!
//! The adapter a declarative-infrastructure tool drives: it reads its
//! connection settings from the provider block (or `SERVICE_*` variables)
//! and maps resource lifecycle calls onto the minion client.

mod config;
mod error;
mod resource;

pub use config::{ADDRESS_ENV, PORT_ENV, ProviderConfig, TOKEN_ENV};
pub use error::ProviderError;
pub use resource::{MinionResource, ResourceState, validate_name};
