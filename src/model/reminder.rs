use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reminder row joined with the pet name.
pub struct ReminderWithPet {
    pub recordatorio: entity::recordatorio::Model,
    pub mascota: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ReminderDto {
    pub id: i32,
    pub id_cliente: String,
    pub id_mascota: i32,
    pub fecha: DateTime<Utc>,
    pub descripcion: String,
    pub estado: String,
    pub mascota: Option<String>,
}

impl ReminderWithPet {
    pub fn into_dto(self) -> ReminderDto {
        ReminderDto {
            id: self.recordatorio.id,
            id_cliente: self.recordatorio.id_cliente,
            id_mascota: self.recordatorio.id_mascota,
            fecha: self.recordatorio.fecha,
            descripcion: self.recordatorio.descripcion,
            estado: self.recordatorio.estado,
            mascota: self.mascota,
        }
    }
}

/// Body of `POST /recordatorios/guardar`.
///
/// Optional at the serde level so missing fields surface as the API's own
/// validation error.
#[derive(Deserialize, ToSchema)]
pub struct SaveReminderDto {
    /// Owning client's document number.
    pub cliente: Option<String>,
    /// Pet id; the pet must belong to the client.
    pub mascota: Option<i32>,
    pub fecha: Option<DateTime<Utc>>,
    pub descripcion: Option<String>,
}

/// Reminder of one pet, as returned by `GET /Mascota/recordatorio/{id}`.
#[derive(Serialize, ToSchema)]
pub struct PetReminderDto {
    pub id: i32,
    pub fecha: DateTime<Utc>,
    pub descripcion: String,
    pub estado: String,
}
