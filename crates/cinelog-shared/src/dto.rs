//! Data Transfer Objects - request/response types for the API.
//!
//! Field names follow the wire contract: camelCase throughout, and movie
//! objects expose their id as `_id`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response to a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_pic: Option<String>,
}

/// Response to a successful signup. Deliberately carries no token - the
/// client logs in as a separate step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    pub user_id: Uuid,
    pub profile_pic: Option<String>,
}

/// A user's public profile. Never includes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub dob: Option<NaiveDate>,
    pub profile_pic: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response to a profile update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdateResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Request to add a movie. All fields are required; they are optional
/// here so a missing field surfaces as a validation message rather than
/// a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMovieRequest {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub poster: Option<String>,
}

/// Partial update of a movie; omitted fields keep their prior values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMovieRequest {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub poster: Option<String>,
}

/// One catalog entry as served to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub year: i32,
    pub poster: String,
}

/// Response to a movie creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMovieResponse {
    pub message: String,
    pub movie: MovieResponse,
}
