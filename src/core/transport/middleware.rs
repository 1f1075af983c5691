//! Request wrappers applied to every `/minion` route.

use axum::{
    extract::Request,
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::info;

/// Log the method and path of every request, then run the inner service.
pub async fn log_request(request: Request, next: Next) -> Response {
    info!("{} {}", request.method(), request.uri().path());
    next.run(request).await
}

/// Reject requests without a non-empty `Authorization` header.
///
/// The token value itself is not checked.
pub async fn require_auth(request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get(AUTHORIZATION)
        .is_some_and(|value| !value.is_empty());

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            "Please supply an Authorization token",
        )
            .into_response();
    }

    next.run(request).await
}
