//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Gates a route on a valid signed bearer token.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// On success the decoded [`Claims`](crate::application::services::Claims)
/// are inserted into the request extensions and the request continues.
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Bearer` if the header is
/// missing, is not a bearer credential, or the token fails verification. The
/// wrapped handler does not run.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/links", post(create_link_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let claims = st.auth_service.verify(&token)?;
    parts.extensions.insert(claims);

    Ok(next.run(Request::from_parts(parts, body)).await)
}
