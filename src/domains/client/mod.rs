//! Client domain module.
//!
//! [`MinionClient`] speaks the `/minion` HTTP API and turns every non-200
//! answer into a [`ClientError`] carrying the status code and body.
//! Callers that only need the operations depend on the [`MinionApi`] trait.

mod error;
mod http_client;

pub use http_client::{MinionApi, MinionClient};
pub use error::ClientError;
