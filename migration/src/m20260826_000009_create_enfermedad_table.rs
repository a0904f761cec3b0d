use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enfermedad::Table)
                    .if_not_exists()
                    .col(pk_auto(Enfermedad::Id))
                    .col(string(Enfermedad::Nombre))
                    .col(text(Enfermedad::Descripcion))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enfermedad::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Enfermedad {
    Table,
    Id,
    Nombre,
    Descripcion,
}
