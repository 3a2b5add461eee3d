//! Movie entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub year: i32,
    pub poster: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Movie.
impl From<Model> for cinelog_core::domain::Movie {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            owner_id: model.owner_id,
            title: model.title,
            year: model.year,
            poster: model.poster,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Movie to SeaORM ActiveModel.
impl From<cinelog_core::domain::Movie> for ActiveModel {
    fn from(movie: cinelog_core::domain::Movie) -> Self {
        Self {
            id: Set(movie.id),
            owner_id: Set(movie.owner_id),
            title: Set(movie.title),
            year: Set(movie.year),
            poster: Set(movie.poster),
            created_at: Set(movie.created_at.into()),
            updated_at: Set(movie.updated_at.into()),
        }
    }
}
