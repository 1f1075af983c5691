//! Minion server assembly.
//!
//! Builds the single [`MinionStore`] for the process (optionally seeded from
//! a file) and hands it to the HTTP transport.

use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::Result;
use super::transport::HttpTransport;
use crate::domains::minions::MinionStore;

/// The running service: configuration plus the shared store.
#[derive(Clone)]
pub struct MinionServer {
    /// Server configuration.
    config: Arc<Config>,

    /// The one store every request handler works on.
    store: Arc<MinionStore>,
}

impl MinionServer {
    /// Create a server, loading the seed file if one is configured.
    pub fn new(config: Config) -> Result<Self> {
        let store = match &config.seed.path {
            Some(path) => MinionStore::from_seed_file(path)?,
            None => MinionStore::new(),
        };
        info!("Store ready with {} minions", store.len());

        Ok(Self::with_store(config, store))
    }

    /// Create a server around an existing store.
    pub fn with_store(config: Config, store: MinionStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// A handle to the shared store.
    pub fn store(&self) -> Arc<MinionStore> {
        Arc::clone(&self.store)
    }

    /// Serve the HTTP API until shutdown.
    pub async fn run(self) -> Result<()> {
        let transport = HttpTransport::new(self.config.http.clone());
        transport.run(self).await?;
        Ok(())
    }
}
