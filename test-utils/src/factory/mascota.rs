//! Pet factory for creating test pets.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test pets with customizable fields.
///
/// The owner is a required argument; species and breed rows are created
/// automatically unless overridden.
pub struct MascotaFactory<'a> {
    db: &'a DatabaseConnection,
    nombre: String,
    fecha_nacimiento: NaiveDate,
    estado: String,
    id_cliente: String,
    id_especie: Option<i32>,
    id_raza: Option<i32>,
}

impl<'a> MascotaFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, id_cliente: &str) -> Self {
        Self {
            db,
            nombre: format!("Mascota {}", next_id()),
            fecha_nacimiento: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            estado: "Activo".to_string(),
            id_cliente: id_cliente.to_string(),
            id_especie: None,
            id_raza: None,
        }
    }

    pub fn nombre(mut self, nombre: impl Into<String>) -> Self {
        self.nombre = nombre.into();
        self
    }

    pub fn fecha_nacimiento(mut self, fecha: NaiveDate) -> Self {
        self.fecha_nacimiento = fecha;
        self
    }

    pub fn estado(mut self, estado: impl Into<String>) -> Self {
        self.estado = estado.into();
        self
    }

    pub fn id_especie(mut self, id_especie: i32) -> Self {
        self.id_especie = Some(id_especie);
        self
    }

    pub fn id_raza(mut self, id_raza: i32) -> Self {
        self.id_raza = Some(id_raza);
        self
    }

    /// Builds and inserts the pet, creating species and breed rows when not
    /// provided.
    pub async fn build(self) -> Result<entity::mascota::Model, DbErr> {
        let id_especie = match self.id_especie {
            Some(id) => id,
            None => crate::factory::especie::create_especie(self.db).await?.id,
        };
        let id_raza = match self.id_raza {
            Some(id) => id,
            None => crate::factory::raza::create_raza(self.db, id_especie).await?.id,
        };

        entity::mascota::ActiveModel {
            nombre: ActiveValue::Set(self.nombre),
            fecha_nacimiento: ActiveValue::Set(self.fecha_nacimiento),
            estado: ActiveValue::Set(self.estado),
            id_cliente: ActiveValue::Set(self.id_cliente),
            id_especie: ActiveValue::Set(id_especie),
            id_raza: ActiveValue::Set(id_raza),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active pet owned by the given client.
pub async fn create_mascota(
    db: &DatabaseConnection,
    id_cliente: &str,
) -> Result<entity::mascota::Model, DbErr> {
    MascotaFactory::new(db, id_cliente).build().await
}
