use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260826_000004_create_especie_table::Especie, m20260826_000005_create_raza_table::Raza,
    m20260826_000006_create_usuarios_table::Usuarios,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mascota::Table)
                    .if_not_exists()
                    .col(pk_auto(Mascota::Id))
                    .col(string(Mascota::Nombre))
                    .col(date(Mascota::FechaNacimiento))
                    .col(string(Mascota::Estado))
                    .col(string(Mascota::IdCliente))
                    .col(integer(Mascota::IdEspecie))
                    .col(integer(Mascota::IdRaza))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mascota_id_cliente")
                            .from(Mascota::Table, Mascota::IdCliente)
                            .to(Usuarios::Table, Usuarios::NDocumento)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mascota_id_especie")
                            .from(Mascota::Table, Mascota::IdEspecie)
                            .to(Especie::Table, Especie::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mascota_id_raza")
                            .from(Mascota::Table, Mascota::IdRaza)
                            .to(Raza::Table, Raza::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mascota::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mascota {
    Table,
    Id,
    Nombre,
    FechaNacimiento,
    Estado,
    IdCliente,
    IdEspecie,
    IdRaza,
}
