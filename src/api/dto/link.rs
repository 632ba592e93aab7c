//! DTOs for link creation and listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request body for `POST /links`.
///
/// A missing `original` deserializes to an empty string so it is reported as
/// a validation error rather than a parse error.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "The 'original' field is required"))]
    pub original: String,
}

/// Response body for a created link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub message: String,
    pub short_code: String,
    pub url: String,
}

/// A stored link as returned by `GET /links/all`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub id: i64,
    pub original: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl From<Link> for LinkRecord {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            original: link.original,
            short_code: link.short_code,
            created_at: link.created_at,
            clicks: link.clicks,
        }
    }
}
