use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - an account that owns a movie catalog.
///
/// `password_hash` is the Argon2 PHC string produced at signup; the
/// plaintext password is never stored. `dob` is a plain calendar date so
/// the value survives timezone round-trips unchanged. `profile_pic` is a
/// stable storage reference, not a URL - callers expand it against the
/// public base URL before returning it to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub dob: Option<NaiveDate>,
    pub profile_pic: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamps.
    pub fn new(
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        dob: Option<NaiveDate>,
        profile_pic: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            first_name,
            last_name,
            dob,
            profile_pic,
            created_at: now,
            updated_at: now,
        }
    }
}
