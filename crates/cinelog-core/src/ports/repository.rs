use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Movie, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Update an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by email, matching the stored value exactly.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Whether a user with this email exists, compared case-insensitively.
    /// Enforces the write-time uniqueness invariant at signup.
    async fn email_exists(&self, email: &str) -> Result<bool, RepoError>;
}

/// Movie repository. All reads and writes are ownership-scoped.
#[async_trait]
pub trait MovieRepository: BaseRepository<Movie, Uuid> {
    /// All movies owned by `owner_id`.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Movie>, RepoError>;

    /// Find a movie by `{id AND owner_id}`. Returns `None` both when the
    /// movie does not exist and when it belongs to someone else, so
    /// non-owners cannot probe for existence. Update and delete both go
    /// through this lookup.
    async fn find_owned(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Movie>, RepoError>;
}
