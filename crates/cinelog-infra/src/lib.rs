//! # Cinelog Infrastructure
//!
//! Concrete implementations of the ports defined in `cinelog-core`.
//! This crate contains database, storage, and authentication adapters.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory repositories and local storage only
//! - `postgres` - PostgreSQL database support via SeaORM
//! - `auth` - JWT + Argon2 authentication

pub mod database;
pub mod storage;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::{InMemoryMovieRepository, InMemoryUserRepository};
pub use storage::LocalFileStorage;

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

#[cfg(feature = "postgres")]
pub use database::{PostgresMovieRepository, PostgresUserRepository};
