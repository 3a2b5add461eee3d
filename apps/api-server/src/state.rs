//! Application state - shared across all handlers.

use std::sync::Arc;

use cinelog_core::ports::{
    FileStorage, MovieRepository, PasswordService, TokenService, UserRepository,
};
use cinelog_infra::storage::LocalFileStorage;
use cinelog_infra::{
    Argon2PasswordService, InMemoryMovieRepository, InMemoryUserRepository, JwtTokenService,
};

#[cfg(feature = "postgres")]
use cinelog_infra::database::{PostgresMovieRepository, PostgresUserRepository, connect};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub movies: Arc<dyn MovieRepository>,
    pub storage: Arc<dyn FileStorage>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
    /// Base URL stored references are expanded against.
    pub public_base_url: String,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let (users, movies): (Arc<dyn UserRepository>, Arc<dyn MovieRepository>) = {
            if let Some(db_config) = &config.database {
                match connect(db_config).await {
                    Ok(conn) => {
                        let conn = Arc::new(conn);
                        (
                            Arc::new(PostgresUserRepository::new(conn.clone())),
                            Arc::new(PostgresMovieRepository::new(conn)),
                        )
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Self::in_memory_repos()
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory_repos()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (users, movies): (Arc<dyn UserRepository>, Arc<dyn MovieRepository>) = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Self::in_memory_repos()
        };

        tracing::info!("Application state initialized");

        Self {
            users,
            movies,
            storage: Arc::new(LocalFileStorage::new(config.uploads_dir.clone())),
            tokens: Arc::new(JwtTokenService::new(config.jwt.clone())),
            passwords: Arc::new(Argon2PasswordService::new()),
            public_base_url: config.public_base_url.clone(),
        }
    }

    fn in_memory_repos() -> (Arc<dyn UserRepository>, Arc<dyn MovieRepository>) {
        (
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryMovieRepository::new()),
        )
    }
}
