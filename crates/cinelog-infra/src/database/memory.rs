//! In-memory repository implementations - used as fallback when the
//! database is not configured, and by the integration tests.
//!
//! Note: Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use cinelog_core::domain::{Movie, User};
use cinelog_core::error::RepoError;
use cinelog_core::ports::{BaseRepository, MovieRepository, UserRepository};

/// In-memory user store using a HashMap with async RwLock.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.write().await;

        // Same unique-email constraint the database enforces
        let email_lower = user.email.to_lowercase();
        if users.values().any(|u| u.email.to_lowercase() == email_lower) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(RepoError::NotFound);
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut users = self.users.write().await;
        users.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, RepoError> {
        let email_lower = email.to_lowercase();
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email.to_lowercase() == email_lower))
    }
}

/// In-memory movie store using a HashMap with async RwLock.
pub struct InMemoryMovieRepository {
    movies: RwLock<HashMap<Uuid, Movie>>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self {
            movies: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryMovieRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Movie, Uuid> for InMemoryMovieRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Movie>, RepoError> {
        let movies = self.movies.read().await;
        Ok(movies.get(&id).cloned())
    }

    async fn insert(&self, movie: Movie) -> Result<Movie, RepoError> {
        let mut movies = self.movies.write().await;
        movies.insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn update(&self, movie: Movie) -> Result<Movie, RepoError> {
        let mut movies = self.movies.write().await;

        if !movies.contains_key(&movie.id) {
            return Err(RepoError::NotFound);
        }

        movies.insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut movies = self.movies.write().await;
        movies.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Movie>, RepoError> {
        let movies = self.movies.read().await;
        Ok(movies
            .values()
            .filter(|m| m.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_owned(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Movie>, RepoError> {
        let movies = self.movies.read().await;
        Ok(movies
            .get(&id)
            .filter(|m| m.owner_id == owner_id)
            .cloned())
    }
}
