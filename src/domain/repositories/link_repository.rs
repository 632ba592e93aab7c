//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Store for short links.
///
/// The store exclusively owns link records and is responsible for any
/// pooling or locking it needs. All access to persisted links goes through
/// this trait.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new link with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already taken.
    /// Returns [`AppError::Internal`] or [`AppError::Unavailable`] on storage errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code without touching the click counter.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists every link in insertion order.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Atomically increments the click counter of `code`.
    ///
    /// Returns the updated link, or `Ok(None)` if no link has that code.
    /// Concurrent calls for the same code never lose an increment.
    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Round-trips to the underlying storage.
    async fn ping(&self) -> Result<(), AppError>;
}
