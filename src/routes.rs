//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /ping`        - Liveness (public)
//! - `GET  /health`      - Store health check (public)
//! - `GET  /{code}`      - Short link redirect (public)
//! - `POST /links`       - Create a short link (Bearer token required)
//! - `GET  /links/all`   - List all links (Bearer token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Requests exceeding the configured limit get `408`
//! - **Authentication** - Bearer token on the `/links` routes only
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, ping_handler, redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// `request_timeout` bounds each request end to end.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .merge(api_router)
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
