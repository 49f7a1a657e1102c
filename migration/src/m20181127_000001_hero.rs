use sea_orm_migration::{prelude::*, schema::*};

static IDX_HERO_NAME: &str = "idx_hero_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hero::Table)
                    .if_not_exists()
                    .col(pk_auto(Hero::Id))
                    .col(string_null(Hero::Name))
                    .col(text_null(Hero::Description))
                    .col(blob_null(Hero::Image))
                    .col(timestamp(Hero::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // The hero list is always read sorted by name
        manager
            .create_index(
                Index::create()
                    .name(IDX_HERO_NAME)
                    .table(Hero::Table)
                    .col(Hero::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_HERO_NAME)
                    .table(Hero::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Hero::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Hero {
    Table,
    Id,
    Name,
    Description,
    Image,
    CreatedAt,
}
