//! Bearer-gated API routes.
//!
//! The auth layer is applied by [`crate::routes::app_router`].

use crate::api::handlers::{create_link_handler, list_links_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes that require a valid bearer token.
///
/// # Endpoints
///
/// - `POST /links`      - Create a short link
/// - `GET  /links/all`  - List every stored link
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler))
        .route("/links/all", get(list_links_handler))
}
