use axum::Json;

use crate::api::dto::ping::PingResponse;

/// `GET /ping`. Always answers, regardless of store state.
pub async fn ping_handler() -> Json<PingResponse> {
    Json(PingResponse { message: "pong" })
}
