use serde::Serialize;

/// Liveness response body: `{"message":"pong"}`.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
}
