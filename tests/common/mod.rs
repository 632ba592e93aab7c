#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::json;
use short_links::application::services::Claims;
use short_links::domain::entities::{Link, NewLink};
use short_links::domain::repositories::LinkRepository;
use short_links::error::AppError;
use short_links::infrastructure::persistence::MemoryLinkRepository;
use short_links::routes::app_router;
use short_links::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub const SECRET: &str = "test-signing-secret";
pub const BASE_URL: &str = "http://sho.rt";

pub fn create_test_state(repository: Arc<dyn LinkRepository>) -> AppState {
    AppState::new(repository, BASE_URL, SECRET)
}

/// Full application stack over an in-memory store.
pub fn create_test_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());
    let server = create_test_server_with(repository.clone(), Duration::from_secs(5));

    (server, repository)
}

/// Full application stack over any store, with the given request timeout.
pub fn create_test_server_with(
    repository: Arc<dyn LinkRepository>,
    request_timeout: Duration,
) -> TestServer {
    let state = create_test_state(repository);
    let app = Router::new().fallback_service(app_router(state, request_timeout));

    TestServer::new(app).unwrap()
}

pub fn now() -> u64 {
    chrono::Utc::now().timestamp() as u64
}

pub fn sign(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// A token valid for one hour.
pub fn valid_token() -> String {
    sign(
        &Claims {
            sub: Some("operator".to_string()),
            iat: Some(now()),
            exp: Some(now() + 3600),
        },
        SECRET,
    )
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Store that is never reachable: every call fails as a transient outage.
pub struct UnreachableStore;

fn outage() -> AppError {
    AppError::unavailable("Storage temporarily unavailable", json!({}))
}

#[async_trait]
impl LinkRepository for UnreachableStore {
    async fn create(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(outage())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(outage())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        Err(outage())
    }

    async fn increment_clicks(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(outage())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(outage())
    }
}

/// In-memory store that sleeps before every call.
pub struct SlowStore {
    pub inner: MemoryLinkRepository,
    pub delay: Duration,
}

impl SlowStore {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: MemoryLinkRepository::new(),
            delay,
        }
    }
}

#[async_trait]
impl LinkRepository for SlowStore {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        tokio::time::sleep(self.delay).await;
        self.inner.create(new_link).await
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_by_code(code).await
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        tokio::time::sleep(self.delay).await;
        self.inner.list().await
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError> {
        tokio::time::sleep(self.delay).await;
        self.inner.increment_clicks(code).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        tokio::time::sleep(self.delay).await;
        self.inner.ping().await
    }
}
