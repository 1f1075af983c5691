//! Provider block settings.

use serde::{Deserialize, Serialize};

use super::error::ProviderError;
use crate::domains::client::MinionClient;

/// Environment variable holding the service address (with scheme).
pub const ADDRESS_ENV: &str = "SERVICE_ADDRESS";
/// Environment variable holding the service port.
pub const PORT_ENV: &str = "SERVICE_PORT";
/// Environment variable holding the bearer token.
pub const TOKEN_ENV: &str = "SERVICE_TOKEN";

/// Connection settings for the provider.
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Service address, including `http://` or `https://`.
    pub host: String,

    /// Service port.
    pub port: u16,

    /// Token sent in the `Authorization` header.
    pub secret: String,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl ProviderConfig {
    /// Load the settings from `SERVICE_ADDRESS`, `SERVICE_PORT` and `SERVICE_TOKEN`.
    pub fn from_env() -> Result<Self, ProviderError> {
        let host = required_var(ADDRESS_ENV)?;
        let port = required_var(PORT_ENV)?
            .parse()
            .map_err(|e| ProviderError::config(format!("{PORT_ENV} is not a valid port: {e}")))?;
        let secret = required_var(TOKEN_ENV)?;

        Ok(Self { host, port, secret })
    }

    /// Build the client the resource operations run through.
    pub fn configure(&self) -> Result<MinionClient, ProviderError> {
        Ok(MinionClient::new(&self.host, self.port, &self.secret)?)
    }
}

fn required_var(key: &str) -> Result<String, ProviderError> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ProviderError::config(format!("{key} must be set"))),
    }
}
