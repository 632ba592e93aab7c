//! Link creation, resolution and listing.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::is_valid_url;

/// Attempts at finding a free short code before giving up.
const MAX_CODE_ATTEMPTS: usize = 5;

/// Result of a successful [`LinkService::create_link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLink {
    pub short_code: String,
    /// Fully qualified redirect URL: `{base_url}/{short_code}`.
    pub url: String,
}

/// Service orchestrating the URL validator and the link store.
///
/// Holds no link state between calls; every operation reads fresh from the store.
pub struct LinkService<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: LinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `base_url` prefixes every returned short URL; a trailing `/` is ignored.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            repository,
            base_url,
        }
    }

    /// Validates `original`, issues a short code and persists the link.
    ///
    /// # Code Generation
    ///
    /// Codes are random and drawn independently. The store rejects duplicates,
    /// in which case a new code is drawn, up to 5 attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `original` is empty or not an
    /// acceptable http/https URL. Nothing is persisted in that case.
    ///
    /// Returns [`AppError::Internal`] if every attempt collided, and passes
    /// storage errors through unchanged.
    pub async fn create_link(&self, original: &str) -> Result<CreatedLink, AppError> {
        if original.trim().is_empty() {
            return Err(AppError::bad_request(
                "The 'original' field is required",
                json!({ "field": "original" }),
            ));
        }

        if !is_valid_url(original) {
            return Err(AppError::bad_request(
                "Invalid URL",
                json!({ "original": original }),
            ));
        }

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let new_link = NewLink::now(original.to_string(), generate_code());

            match self.repository.create(new_link).await {
                Ok(link) => {
                    tracing::info!(code = %link.short_code, id = link.id, "Link created");

                    return Ok(CreatedLink {
                        url: self.short_url(&link.short_code),
                        short_code: link.short_code,
                    });
                }
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(attempt, "Short code collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Resolves a short code to its original URL, counting the click.
    ///
    /// The increment and the lookup are one store operation, so the click is
    /// durable before the caller redirects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn resolve_link(&self, code: &str) -> Result<String, AppError> {
        let link = self
            .repository
            .increment_clicks(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        tracing::debug!(code, clicks = link.clicks, "Link resolved");

        Ok(link.original)
    }

    /// Returns every stored link in insertion order.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list().await
    }

    /// Builds the public redirect URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Checks that the store is reachable.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
