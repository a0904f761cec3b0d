use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Veterinarios::Table)
                    .if_not_exists()
                    .col(pk_auto(Veterinarios::Id))
                    .col(string(Veterinarios::NombreCompleto))
                    .col(string(Veterinarios::EstudiosEspecialidad))
                    .col(integer(Veterinarios::Edad))
                    .col(double(Veterinarios::Altura))
                    .col(integer(Veterinarios::AniosExperiencia))
                    .col(string_null(Veterinarios::ImagenUrl))
                    .col(boolean(Veterinarios::Activo))
                    .col(
                        timestamp_with_time_zone(Veterinarios::CreadoEn)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Veterinarios::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Veterinarios {
    Table,
    Id,
    NombreCompleto,
    EstudiosEspecialidad,
    Edad,
    Altura,
    AniosExperiencia,
    ImagenUrl,
    Activo,
    CreadoEn,
}
