//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Retries applied to reads and click increments on transient failures.
pub const DEFAULT_RETRY_ATTEMPTS: usize = 3;

#[derive(Debug, FromRow)]
struct LinkRow {
    id: i64,
    original: String,
    short_code: String,
    created_at: DateTime<Utc>,
    clicks: i64,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.id,
            row.original,
            row.short_code,
            row.created_at,
            row.clicks,
        )
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Shares the process-wide pool; the pool handles connection reuse. Reads and
/// click increments retry transient failures with exponential backoff;
/// inserts run exactly once.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
    retry_attempts: usize,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
        }
    }

    /// Overrides how many times transient failures are retried.
    pub fn with_retry_attempts(mut self, retry_attempts: usize) -> Self {
        self.retry_attempts = retry_attempts;
        self
    }

    async fn with_retry<T, F, Fut>(&self, operation: F) -> Result<T, AppError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let strategy = ExponentialBackoff::from_millis(10)
            .max_delay(Duration::from_secs(1))
            .map(jitter)
            .take(self.retry_attempts);

        RetryIf::spawn(strategy, operation, AppError::is_transient).await
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (original, short_code, created_at, clicks)
            VALUES ($1, $2, $3, 0)
            RETURNING id, original, short_code, created_at, clicks
            "#,
        )
        .bind(&new_link.original)
        .bind(&new_link.short_code)
        .bind(new_link.created_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        self.with_retry(move || async move {
            let row = sqlx::query_as::<_, LinkRow>(
                r#"
                SELECT id, original, short_code, created_at, clicks
                FROM links
                WHERE short_code = $1
                "#,
            )
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

            Ok(row.map(Link::from))
        })
        .await
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        self.with_retry(move || async move {
            let rows = sqlx::query_as::<_, LinkRow>(
                r#"
                SELECT id, original, short_code, created_at, clicks
                FROM links
                ORDER BY id ASC
                "#,
            )
            .fetch_all(self.pool.as_ref())
            .await?;

            Ok(rows.into_iter().map(Link::from).collect())
        })
        .await
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError> {
        self.with_retry(move || async move {
            let row = sqlx::query_as::<_, LinkRow>(
                r#"
                UPDATE links
                SET clicks = clicks + 1
                WHERE short_code = $1
                RETURNING id, original, short_code, created_at, clicks
                "#,
            )
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

            Ok(row.map(Link::from))
        })
        .await
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
