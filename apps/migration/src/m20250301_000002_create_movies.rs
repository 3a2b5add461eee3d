use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Movie::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Movie::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(Movie::Title).string().not_null())
                    .col(ColumnDef::new(Movie::Year).integer().not_null())
                    .col(ColumnDef::new(Movie::Poster).string().not_null())
                    .col(
                        ColumnDef::new(Movie::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Movie::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movies_owner")
                            .from(Movie::Table, Movie::OwnerId)
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Every read and write is filtered by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_movies_owner")
                    .table(Movie::Table)
                    .col(Movie::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movie::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Movie {
    #[iden = "movies"]
    Table,
    Id,
    OwnerId,
    Title,
    Year,
    Poster,
    CreatedAt,
    UpdatedAt,
}
