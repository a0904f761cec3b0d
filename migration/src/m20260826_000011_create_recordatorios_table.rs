use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260826_000006_create_usuarios_table::Usuarios, m20260826_000007_create_mascota_table::Mascota,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recordatorios::Table)
                    .if_not_exists()
                    .col(pk_auto(Recordatorios::Id))
                    .col(string(Recordatorios::IdCliente))
                    .col(integer(Recordatorios::IdMascota))
                    .col(timestamp_with_time_zone(Recordatorios::Fecha))
                    .col(text(Recordatorios::Descripcion))
                    .col(string(Recordatorios::Estado))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recordatorios_id_cliente")
                            .from(Recordatorios::Table, Recordatorios::IdCliente)
                            .to(Usuarios::Table, Usuarios::NDocumento)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recordatorios_id_mascota")
                            .from(Recordatorios::Table, Recordatorios::IdMascota)
                            .to(Mascota::Table, Mascota::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recordatorios::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Recordatorios {
    Table,
    Id,
    IdCliente,
    IdMascota,
    Fecha,
    Descripcion,
    Estado,
}
