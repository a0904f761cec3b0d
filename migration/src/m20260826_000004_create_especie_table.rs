use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Especie::Table)
                    .if_not_exists()
                    .col(pk_auto(Especie::Id))
                    .col(string(Especie::Especie))
                    .col(string_null(Especie::Imagen))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Especie::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Especie {
    Table,
    Id,
    Especie,
    Imagen,
}
