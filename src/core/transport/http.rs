//! HTTP transport implementation.
//!
//! Serves the `/minion` API with axum. Every route is wrapped in request
//! logging (outermost) and the bearer-token presence check (innermost).

use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::middleware::{log_request, require_auth};
use super::{HttpConfig, TransportError, TransportResult};
use crate::core::MinionServer;
use crate::domains::minions::MinionStore;
use crate::domains::minions::handlers::{
    create_minion, delete_minion, get_minion, list_minions, unnamed_minion, update_minion,
};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Build the `/minion` router around the given store.
pub fn build_router(store: Arc<MinionStore>, enable_cors: bool) -> Router {
    let wrappers = ServiceBuilder::new()
        .layer(middleware::from_fn(log_request))
        .layer(middleware::from_fn(require_auth));

    let app = Router::new()
        .route("/minion", get(list_minions).post(create_minion))
        .route(
            "/minion/",
            get(unnamed_minion).put(unnamed_minion).delete(unnamed_minion),
        )
        .route(
            "/minion/{name}",
            get(get_minion).put(update_minion).delete(delete_minion),
        )
        .route_layer(wrappers)
        .with_state(store);

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        return app.layer(cors);
    }

    app
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport until interrupted.
    pub async fn run(self, server: MinionServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server.store(), self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {}", self.config.description());
        info!("  → GET|POST          /minion");
        info!("  → GET|PUT|DELETE    /minion/{{name}}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(TransportError::ServeError)?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::minions::Minion;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use tracing_test::traced_test;

    fn app() -> (Router, Arc<MinionStore>) {
        let store = Arc::new(MinionStore::new());
        (build_router(store.clone(), false), store)
    }

    fn request(method: &str, uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, token);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    const BODY: &str = r#"{"name":"a","description":"d","tags":["x","y"]}"#;

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        let (app, _) = app();

        let (status, body) = send(&app, request("POST", "/minion", Some("t"), BODY)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#""name":"a""#));

        let (status, body) = send(&app, request("POST", "/minion", Some("t"), BODY)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("duplicate alert!!! a"));

        let (status, _) = send(&app, request("GET", "/minion/a", None, "")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(&app, request("DELETE", "/minion/a", Some("t"), "")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Deleted minion with name a");

        let (status, _) = send(&app, request("GET", "/minion/a", Some("t"), "")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_auth_rejects_missing_and_empty_header() {
        let (app, _) = app();

        for token in [None, Some("")] {
            let (status, body) = send(&app, request("GET", "/minion", token, "")).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body, "Please supply an Authorization token");
        }

        let (status, _) = send(&app, request("POST", "/minion", None, BODY)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[traced_test]
    #[tokio::test]
    async fn test_rejected_requests_are_still_logged() {
        let (app, _) = app();

        let (status, _) = send(&app, request("GET", "/minion/a", None, "")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(logs_contain("GET /minion/a"));

        let (status, _) = send(&app, request("DELETE", "/minion/b", Some("t"), "")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(logs_contain("DELETE /minion/b"));
    }

    #[tokio::test]
    async fn test_auth_accepts_any_token_value() {
        let (app, _) = app();
        for token in ["t", "Bearer whatever", "not-even-a-token"] {
            let (status, _) = send(&app, request("GET", "/minion", Some(token), "")).await;
            assert_eq!(status, StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_list_returns_object_keyed_by_name() {
        let (app, store) = app();
        store.create(Minion::new("a", "d", ["x"])).unwrap();
        store.create(Minion::new("b", "e", ["y"])).unwrap();

        let (status, body) = send(&app, request("GET", "/minion", Some("t"), "")).await;
        assert_eq!(status, StatusCode::OK);

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["a"]["description"], "d");
        assert_eq!(value["b"]["tags"][0], "y");
    }

    #[tokio::test]
    async fn test_create_validation() {
        let (app, store) = app();

        let (status, _) = send(&app, request("POST", "/minion", Some("t"), "")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, request("POST", "/minion", Some("t"), "{oops")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let spaced = r#"{"name":"a b","description":"d","tags":[]}"#;
        let (status, body) = send(&app, request("POST", "/minion", Some("t"), spaced)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "malformed request with whitespaces");

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_update() {
        let (app, store) = app();
        store.create(Minion::new("a", "d", ["x"])).unwrap();

        let replacement = r#"{"name":"a","description":"new","tags":["z"]}"#;
        let (status, body) =
            send(&app, request("PUT", "/minion/a", Some("t"), replacement)).await;
        assert_eq!(status, StatusCode::OK);
        let updated: Minion = serde_json::from_str(&body).unwrap();
        assert_eq!(updated, Minion::new("a", "new", ["z"]));

        let (status, _) = send(&app, request("PUT", "/minion/a", Some("t"), "{oops")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) =
            send(&app, request("PUT", "/minion/ghost", Some("t"), replacement)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("ghost"));
    }

    #[tokio::test]
    async fn test_update_keeps_diverging_body_name() {
        let (app, store) = app();
        store.create(Minion::new("a", "d", Vec::<String>::new())).unwrap();

        let renamed = r#"{"name":"b","description":"d","tags":[]}"#;
        let (status, _) = send(&app, request("PUT", "/minion/a", Some("t"), renamed)).await;
        assert_eq!(status, StatusCode::OK);

        assert_eq!(store.get("a").unwrap().name, "b");
        assert!(store.get("b").is_err());
    }

    #[tokio::test]
    async fn test_empty_name_segment_is_not_found() {
        let (app, _) = app();
        for method in ["GET", "PUT", "DELETE"] {
            let (status, _) = send(&app, request(method, "/minion/", Some("t"), BODY)).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (app, _) = app();
        let (status, body) = send(&app, request("DELETE", "/minion/ghost", Some("t"), "")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("ghost"));
    }

    #[tokio::test]
    async fn test_concurrent_requests() {
        let (app, store) = app();
        store
            .create(Minion::new("a", "d", ["1", "2", "3", "4"]))
            .unwrap();

        let requests = (0..32).map(|_| {
            let app = app.clone();
            async move { send(&app, request("GET", "/minion/a", Some("t"), "")).await }
        });

        for (status, body) in futures::future::join_all(requests).await {
            assert_eq!(status, StatusCode::OK);
            let minion: Minion = serde_json::from_str(&body).unwrap();
            assert!(minion.same_as(&Minion::new("a", "d", ["1", "2", "3", "4"])));
        }
    }
}
