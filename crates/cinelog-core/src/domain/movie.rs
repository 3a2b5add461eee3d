use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Movie entity - one catalog entry, owned by exactly one user.
///
/// `owner_id` is fixed at creation and never changes; every repository
/// read and write is filtered by it. `poster` is either an absolute URL
/// or a stored-file reference expanded at the API boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub year: i32,
    pub poster: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    /// Create a new movie owned by `owner_id`.
    pub fn new(owner_id: Uuid, title: String, year: i32, poster: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title,
            year,
            poster,
            created_at: now,
            updated_at: now,
        }
    }
}
