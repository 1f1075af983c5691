//! Client error types.

use thiserror::Error;

/// Errors returned by [`MinionClient`](super::MinionClient) calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured host has no `http://` or `https://` scheme.
    #[error("invalid host {0:?}: expected an http:// or https:// URL")]
    InvalidHost(String),

    /// The token cannot be sent as a header value.
    #[error("invalid authorization token: {0}")]
    InvalidToken(String),

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with anything other than 200.
    #[error("got a non 200 status code: {status}{}", body_suffix(.body))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, when it could be read.
        body: Option<String>,
    },

    /// A 200 response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(" - {body}"),
        None => String::new(),
    }
}

impl ClientError {
    /// HTTP status code, for errors that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server reported the target as missing.
    ///
    /// Checks the status code first and falls back to the message text, which
    /// is what existing callers match on.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404) || self.to_string().contains("not found")
    }
}
