pub use sea_orm_migration::prelude::*;

mod m20260826_000001_create_documento_table;
mod m20260826_000002_create_rol_table;
mod m20260826_000003_create_servicios_table;
mod m20260826_000004_create_especie_table;
mod m20260826_000005_create_raza_table;
mod m20260826_000006_create_usuarios_table;
mod m20260826_000007_create_mascota_table;
mod m20260826_000008_create_veterinarios_table;
mod m20260826_000009_create_enfermedad_table;
mod m20260826_000010_create_citas_table;
mod m20260826_000011_create_recordatorios_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260826_000001_create_documento_table::Migration),
            Box::new(m20260826_000002_create_rol_table::Migration),
            Box::new(m20260826_000003_create_servicios_table::Migration),
            Box::new(m20260826_000004_create_especie_table::Migration),
            Box::new(m20260826_000005_create_raza_table::Migration),
            Box::new(m20260826_000006_create_usuarios_table::Migration),
            Box::new(m20260826_000007_create_mascota_table::Migration),
            Box::new(m20260826_000008_create_veterinarios_table::Migration),
            Box::new(m20260826_000009_create_enfermedad_table::Migration),
            Box::new(m20260826_000010_create_citas_table::Migration),
            Box::new(m20260826_000011_create_recordatorios_table::Migration),
        ]
    }
}
