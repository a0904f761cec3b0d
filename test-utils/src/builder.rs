use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with customizable database schemas.
///
/// Tables are generated from the SeaORM entity definitions using the SQLite
/// backend, so tests exercise the same schema the migrations produce.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(Especie)
///     .with_table(Raza)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test schema.
    ///
    /// Tables with foreign keys must be added after the tables they
    /// reference.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every clinic table in dependency order.
    ///
    /// Most repository tests want the full schema because the factories
    /// insert rows for every foreign key they touch.
    pub fn with_clinic_tables(self) -> Self {
        self.with_table(Documento)
            .with_table(Rol)
            .with_table(Servicio)
            .with_table(Especie)
            .with_table(Raza)
            .with_table(Usuario)
            .with_table(Mascota)
            .with_table(Veterinario)
            .with_table(Enfermedad)
            .with_table(Cita)
            .with_table(Recordatorio)
    }

    /// Builds the configured test context.
    ///
    /// Connects to a fresh in-memory SQLite database and creates every
    /// configured table.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
