//! Handlers for link creation and listing.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, CreateLinkResponse, LinkRecord};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for the submitted URL.
///
/// # Endpoint
///
/// `POST /links` (Bearer token required)
///
/// # Request Body
///
/// ```json
/// { "original": "https://example.com/some/page" }
/// ```
///
/// # Response
///
/// **201 Created**
///
/// ```json
/// {
///   "message": "Link created successfully",
///   "shortCode": "aZ3k9Q",
///   "url": "http://localhost:3000/aZ3k9Q"
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: body is not JSON, `original` is missing or empty,
///   or the URL is rejected by the validator
/// - **401 Unauthorized**: handled by the auth layer before this runs
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let created = state.link_service.create_link(&payload.original).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            message: "Link created successfully".to_string(),
            short_code: created.short_code,
            url: created.url,
        }),
    ))
}

/// Lists every stored link in insertion order.
///
/// `GET /links/all` (Bearer token required)
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkRecord>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkRecord::from).collect()))
}
