//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

use cinelog_core::domain::{Movie, User};
use cinelog_core::error::RepoError;
use cinelog_core::ports::{MovieRepository, UserRepository};

use super::entity::movie::{self, Entity as MovieEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL movie repository.
pub type PostgresMovieRepository = PostgresBaseRepository<MovieEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = if let Some(at_pos) = email.find('@') {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = if local.len() > 1 {
                format!("{}***", &local[..1])
            } else {
                "***".to_string()
            };
            format!("{}{}", masked_local, domain)
        } else {
            "***".to_string()
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, RepoError> {
        let count = UserEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    user::Entity,
                    user::Column::Email,
                ))))
                .eq(email.to_lowercase()),
            )
            .count(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(count > 0)
    }
}

#[async_trait]
impl MovieRepository for PostgresMovieRepository {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Movie>, RepoError> {
        let result = MovieEntity::find()
            .filter(movie::Column::OwnerId.eq(owner_id))
            .all(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_owned(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Movie>, RepoError> {
        let result = MovieEntity::find()
            .filter(movie::Column::Id.eq(id))
            .filter(movie::Column::OwnerId.eq(owner_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}
