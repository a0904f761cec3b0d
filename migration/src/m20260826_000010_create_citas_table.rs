use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260826_000003_create_servicios_table::Servicios,
    m20260826_000006_create_usuarios_table::Usuarios,
    m20260826_000007_create_mascota_table::Mascota,
    m20260826_000008_create_veterinarios_table::Veterinarios,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Citas::Table)
                    .if_not_exists()
                    .col(pk_auto(Citas::Id))
                    .col(integer(Citas::IdMascota))
                    .col(string(Citas::IdCliente))
                    .col(integer(Citas::IdServicio))
                    .col(integer(Citas::IdVeterinario))
                    .col(timestamp_with_time_zone(Citas::Fecha))
                    .col(text(Citas::Descripcion))
                    .col(string(Citas::Estado))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_citas_id_mascota")
                            .from(Citas::Table, Citas::IdMascota)
                            .to(Mascota::Table, Mascota::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_citas_id_cliente")
                            .from(Citas::Table, Citas::IdCliente)
                            .to(Usuarios::Table, Usuarios::NDocumento)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_citas_id_servicio")
                            .from(Citas::Table, Citas::IdServicio)
                            .to(Servicios::Table, Servicios::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_citas_id_veterinario")
                            .from(Citas::Table, Citas::IdVeterinario)
                            .to(Veterinarios::Table, Veterinarios::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Citas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Citas {
    Table,
    Id,
    IdMascota,
    IdCliente,
    IdServicio,
    IdVeterinario,
    Fecha,
    Descripcion,
    Estado,
}
