use sea_orm_migration::{prelude::*, schema::*};

use super::m20260826_000004_create_especie_table::Especie;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Raza::Table)
                    .if_not_exists()
                    .col(pk_auto(Raza::Id))
                    .col(string(Raza::Raza))
                    .col(string_null(Raza::Descripcion))
                    .col(string_null(Raza::Imagen))
                    .col(integer(Raza::IdEspecie))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_raza_id_especie")
                            .from(Raza::Table, Raza::IdEspecie)
                            .to(Especie::Table, Especie::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Raza::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Raza {
    Table,
    Id,
    Raza,
    Descripcion,
    Imagen,
    IdEspecie,
}
