//! Domains module containing business logic organized by bounded contexts.
//!
//! - **minions**: the minion record, its store and its HTTP handlers
//! - **client**: HTTP client for the minion API (feature `client`)
//! - **provider**: resource lifecycle adapter built on the client (feature `client`)

pub mod minions;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub mod provider;
