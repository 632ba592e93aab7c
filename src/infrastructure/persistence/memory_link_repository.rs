//! In-process implementation of the link repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Links {
    /// Insertion order; a link's id is its position plus one.
    rows: Vec<Link>,
    by_code: HashMap<String, usize>,
}

/// Link store backed by process memory.
///
/// Used when no database is configured, and by the integration tests.
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    links: RwLock<Links>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.write().await;

        if links.by_code.contains_key(&new_link.short_code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_short_code_key" }),
            ));
        }

        let index = links.rows.len();
        let link = new_link.into_link(index as i64 + 1);

        links.by_code.insert(link.short_code.clone(), index);
        links.rows.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.read().await;

        Ok(links
            .by_code
            .get(code)
            .map(|&index| links.rows[index].clone()))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.links.read().await.rows.clone())
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError> {
        let mut links = self.links.write().await;

        let Some(&index) = links.by_code.get(code) else {
            return Ok(None);
        };

        let link = &mut links.rows[index];
        link.clicks += 1;

        Ok(Some(link.clone()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
