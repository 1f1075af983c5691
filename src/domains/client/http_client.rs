//! HTTP client for the minion service.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::{debug, instrument};

use super::error::ClientError;
use crate::domains::minions::Minion;

const MINION_PATH: &str = "minion";

/// CRUD operations against a minion service.
#[async_trait]
pub trait MinionApi: Send + Sync {
    /// Fetch every minion keyed by name.
    async fn list_all(&self) -> Result<HashMap<String, Minion>, ClientError>;

    /// Fetch a single minion.
    async fn get_one(&self, name: &str) -> Result<Minion, ClientError>;

    /// Create a minion.
    async fn create(&self, minion: &Minion) -> Result<(), ClientError>;

    /// Replace the minion stored under `minion.name`.
    async fn update(&self, minion: &Minion) -> Result<(), ClientError>;

    /// Delete a minion.
    async fn delete(&self, name: &str) -> Result<(), ClientError>;
}

/// Stateless HTTP client for the `/minion` API.
///
/// `host` must include its scheme (`http://` or `https://`); the request URL
/// is `<host>:<port>/minion[/<name>]`.
#[derive(Clone)]
pub struct MinionClient {
    http: reqwest::Client,
    base_url: Url,
    token: String,
}

impl MinionClient {
    /// Create a client for the service at `host:port`, authenticating with `token`.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let host = host.into();
        let trimmed = host.trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ClientError::InvalidHost(host));
        }

        let base_url = Url::parse(&format!("{trimmed}:{port}"))
            .map_err(|_| ClientError::InvalidHost(host.clone()))?;
        // A path, query or fragment on the host would swallow the port.
        if base_url.path() != "/"
            || base_url.query().is_some()
            || base_url.fragment().is_some()
        {
            return Err(ClientError::InvalidHost(host));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            token: token.into(),
        })
    }

    /// The URL requests are built from.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, name: Option<&str>) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ClientError::InvalidHost(self.base_url.to_string()))?;
            segments.pop_if_empty().push(MINION_PATH);
            if let Some(name) = name {
                segments.push(name);
            }
        }
        Ok(url)
    }

    #[instrument(skip(self, url, body), fields(url = %url))]
    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::Response, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&self.token)
                .map_err(|err| ClientError::InvalidToken(err.to_string()))?,
        );
        if method != Method::GET && method != Method::DELETE {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let mut request = self.http.request(method, url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            // A body that cannot be drained still yields an error, just without it.
            let body = response.text().await.ok();
            debug!("request failed with status {}", status);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
    ) -> Result<T, ClientError> {
        let response = self.send(method, url, None).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl MinionApi for MinionClient {
    async fn list_all(&self) -> Result<HashMap<String, Minion>, ClientError> {
        self.send_json(Method::GET, self.url(None)?).await
    }

    async fn get_one(&self, name: &str) -> Result<Minion, ClientError> {
        self.send_json(Method::GET, self.url(Some(name))?).await
    }

    async fn create(&self, minion: &Minion) -> Result<(), ClientError> {
        let body = serde_json::to_vec(minion)?;
        self.send(Method::POST, self.url(None)?, Some(body)).await?;
        Ok(())
    }

    async fn update(&self, minion: &Minion) -> Result<(), ClientError> {
        let body = serde_json::to_vec(minion)?;
        self.send(Method::PUT, self.url(Some(minion.name.as_str()))?, Some(body))
            .await?;
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), ClientError> {
        self.send(Method::DELETE, self.url(Some(name))?, None).await?;
        Ok(())
    }
}

impl std::fmt::Debug for MinionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinionClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"[REDACTED]")
            .finish()
    }
}
