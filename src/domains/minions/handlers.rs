//! HTTP handlers for the `/minion` routes.
//!
//! Each handler validates the request, delegates to the [`MinionStore`] and
//! encodes the outcome. Failures are answered with a plain-text body.
//! Successful deletes also answer in plain text rather than JSON.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{instrument, warn};

use super::error::MinionError;
use super::model::Minion;
use super::store::MinionStore;

/// A plain-text error response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Create an error response with the given status and message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 400 with the given message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 404 with the generic "not found" body.
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "not found")
    }
}

impl From<MinionError> for ApiError {
    fn from(err: MinionError) -> Self {
        let status = StatusCode::from_u16(err.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

/// `GET /minion` - every minion keyed by name.
#[instrument(skip_all)]
pub async fn list_minions(
    State(store): State<Arc<MinionStore>>,
) -> Json<HashMap<String, Minion>> {
    Json(store.list().into_iter().collect())
}

/// `POST /minion` - create a minion.
#[instrument(skip_all)]
pub async fn create_minion(
    State(store): State<Arc<MinionStore>>,
    body: Bytes,
) -> ApiResult<Json<Minion>> {
    if body.is_empty() {
        return Err(ApiError::bad_request("invalid request: empty body"));
    }
    let minion: Minion = decode(&body)?;

    let created = store.create(minion)?;
    Ok(Json(created))
}

/// `GET /minion/{name}` - fetch one minion.
#[instrument(skip_all, fields(name = %name))]
pub async fn get_minion(
    State(store): State<Arc<MinionStore>>,
    Path(name): Path<String>,
) -> ApiResult<Json<Minion>> {
    require_name(&name)?;

    store
        .get(&name)
        .map(Json)
        .map_err(|_| ApiError::not_found())
}

/// `PUT /minion/{name}` - replace a minion.
///
/// A missing minion is answered with 400 rather than 404.
#[instrument(skip_all, fields(name = %name))]
pub async fn update_minion(
    State(store): State<Arc<MinionStore>>,
    Path(name): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Minion>> {
    require_name(&name)?;
    if body.is_empty() {
        return Err(ApiError::bad_request("invalid request body"));
    }
    let minion: Minion = decode(&body)?;

    match store.update(&name, minion) {
        Ok(updated) => Ok(Json(updated)),
        Err(err @ MinionError::NotFound(_)) => {
            warn!("{}", err);
            Err(ApiError::bad_request(err.to_string()))
        }
        Err(err) => Err(err.into()),
    }
}

/// `DELETE /minion/{name}` - remove a minion, answering in plain text.
#[instrument(skip_all, fields(name = %name))]
pub async fn delete_minion(
    State(store): State<Arc<MinionStore>>,
    Path(name): Path<String>,
) -> ApiResult<String> {
    require_name(&name)?;

    store.delete(&name)?;
    Ok(format!("Deleted minion with name {name}"))
}

/// `/minion/` with an empty name segment.
pub async fn unnamed_minion() -> ApiError {
    ApiError::not_found()
}

fn require_name(name: &str) -> ApiResult<()> {
    if name.is_empty() {
        return Err(ApiError::not_found());
    }
    Ok(())
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|e| ApiError::bad_request(e.to_string()))
}
