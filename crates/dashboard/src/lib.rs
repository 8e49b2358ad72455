//! Vendor Dashboard library.
//!
//! Server-rendered vendor dashboard: session-gated tabs over data fetched
//! from the vendor backend. Exposed as a library so the router can be
//! tested and embedded.
//!
//! # Modules
//!
//! - `api` - Vendor backend HTTP client
//! - `mock_api` - Built-in fixture backend
//! - `services` - Login/logout, data store, view state, alerts
//! - `routes` - Tab pages and form actions
//! - `middleware` - Session layer and auth extractors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod mock_api;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::middleware::create_session_layer;
use crate::mock_api::MockBackend;
use crate::state::AppState;

/// Directory holding the stylesheet and chart bootstrap script.
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Build the full application router.
///
/// Mounts the built-in backend at `/api` when no external one is
/// configured.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    let mut router = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR));

    if state.config().serves_mock_api() {
        tracing::info!("No VENDOR_API_URL set, serving built-in backend at /api");
        router = router.nest_service("/api", MockBackend::seeded().routes());
    }

    router.layer(session_layer).with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;
    use crate::config::DashboardConfig;

    fn test_app() -> Router {
        let config = DashboardConfig::from_lookup(|_| None).unwrap();
        app(AppState::new(config).unwrap())
    }

    async fn get(uri: &str) -> axum::response::Response {
        test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_tabs_redirect_anonymous_visitors() {
        for uri in ["/", "/products", "/orders", "/customers", "/analytics", "/settings"] {
            let response = get(uri).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
            assert_eq!(response.headers()[header::LOCATION], "/auth/login");
        }
    }

    #[tokio::test]
    async fn test_login_page_renders() {
        let response = get("/auth/login").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Vendor Login"));
    }

    #[tokio::test]
    async fn test_builtin_backend_is_mounted() {
        let response = get("/api/orders/recent").await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_stylesheet_is_served() {
        let response = get("/static/dashboard.css").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
