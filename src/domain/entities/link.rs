//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// Every field except `clicks` is immutable once created. `clicks` only
/// grows, one step per successful redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub original: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        original: String,
        short_code: String,
        created_at: DateTime<Utc>,
        clicks: i64,
    ) -> Self {
        Self {
            id,
            original,
            short_code,
            created_at,
            clicks,
        }
    }
}

/// Input data for creating a new link. Clicks always start at zero.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub original: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl NewLink {
    /// Builds a link record stamped with the current time.
    pub fn now(original: String, short_code: String) -> Self {
        Self {
            original,
            short_code,
            created_at: Utc::now(),
        }
    }

    /// Materializes the stored form once the store has assigned an id.
    pub fn into_link(self, id: i64) -> Link {
        Link::new(id, self.original, self.short_code, self.created_at, 0)
    }
}
