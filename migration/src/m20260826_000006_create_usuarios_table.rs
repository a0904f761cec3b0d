use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260826_000001_create_documento_table::Documento, m20260826_000002_create_rol_table::Rol,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(string(Usuarios::NDocumento).primary_key())
                    .col(string(Usuarios::Nombre))
                    .col(string_uniq(Usuarios::Correoelectronico))
                    .col(string(Usuarios::Contrasena))
                    .col(integer(Usuarios::IdDocumento))
                    .col(integer(Usuarios::IdRol))
                    .col(string(Usuarios::Estado))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_usuarios_id_documento")
                            .from(Usuarios::Table, Usuarios::IdDocumento)
                            .to(Documento::Table, Documento::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_usuarios_id_rol")
                            .from(Usuarios::Table, Usuarios::IdRol)
                            .to(Rol::Table, Rol::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Usuarios {
    Table,
    NDocumento,
    Nombre,
    Correoelectronico,
    Contrasena,
    IdDocumento,
    IdRol,
    Estado,
}
