//! Minions domain module.
//!
//! ## Architecture
//!
//! - `model.rs` - The [`Minion`] record and its JSON shape
//! - `store.rs` - The lock-guarded in-memory store
//! - `handlers.rs` - axum handlers for the `/minion` routes (feature `server`)
//! - `error.rs` - Store error types

mod error;
mod model;
mod store;

#[cfg(feature = "server")]
pub mod handlers;

pub use error::MinionError;
pub use model::{Minion, contains_whitespace};
pub use store::MinionStore;
