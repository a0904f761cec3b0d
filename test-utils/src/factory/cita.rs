//! Appointment factory for creating test appointments.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test appointments.
///
/// Pet and client are required; the referenced service and veterinarian are
/// created automatically unless overridden. Defaults to a pending
/// appointment one day in the future.
pub struct CitaFactory<'a> {
    db: &'a DatabaseConnection,
    id_mascota: i32,
    id_cliente: String,
    id_servicio: Option<i32>,
    id_veterinario: Option<i32>,
    fecha: chrono::DateTime<Utc>,
    descripcion: String,
    estado: String,
}

impl<'a> CitaFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, id_mascota: i32, id_cliente: &str) -> Self {
        Self {
            db,
            id_mascota,
            id_cliente: id_cliente.to_string(),
            id_servicio: None,
            id_veterinario: None,
            fecha: Utc::now() + Duration::days(1),
            descripcion: "Control general".to_string(),
            estado: "Pendiente".to_string(),
        }
    }

    pub fn id_servicio(mut self, id_servicio: i32) -> Self {
        self.id_servicio = Some(id_servicio);
        self
    }

    pub fn id_veterinario(mut self, id_veterinario: i32) -> Self {
        self.id_veterinario = Some(id_veterinario);
        self
    }

    pub fn fecha(mut self, fecha: chrono::DateTime<Utc>) -> Self {
        self.fecha = fecha;
        self
    }

    pub fn descripcion(mut self, descripcion: impl Into<String>) -> Self {
        self.descripcion = descripcion.into();
        self
    }

    pub fn estado(mut self, estado: impl Into<String>) -> Self {
        self.estado = estado.into();
        self
    }

    pub async fn build(self) -> Result<entity::cita::Model, DbErr> {
        let id_servicio = match self.id_servicio {
            Some(id) => id,
            None => crate::factory::servicio::create_servicio(self.db).await?.id,
        };
        let id_veterinario = match self.id_veterinario {
            Some(id) => id,
            None => {
                crate::factory::veterinario::create_veterinario(self.db)
                    .await?
                    .id
            }
        };

        entity::cita::ActiveModel {
            id_mascota: ActiveValue::Set(self.id_mascota),
            id_cliente: ActiveValue::Set(self.id_cliente),
            id_servicio: ActiveValue::Set(id_servicio),
            id_veterinario: ActiveValue::Set(id_veterinario),
            fecha: ActiveValue::Set(self.fecha),
            descripcion: ActiveValue::Set(self.descripcion),
            estado: ActiveValue::Set(self.estado),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending appointment for the given pet and client.
pub async fn create_cita(
    db: &DatabaseConnection,
    id_mascota: i32,
    id_cliente: &str,
) -> Result<entity::cita::Model, DbErr> {
    CitaFactory::new(db, id_mascota, id_cliente).build().await
}
