use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Appointment row joined with the labels shown on listings.
pub struct AppointmentWithLabels {
    pub cita: entity::cita::Model,
    pub mascota: Option<String>,
    pub cliente: Option<String>,
    pub servicio: Option<String>,
    pub veterinario: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AppointmentDto {
    pub id: i32,
    pub id_mascota: i32,
    pub id_cliente: String,
    pub fecha: DateTime<Utc>,
    pub descripcion: String,
    pub estado: String,
    pub mascota: Option<String>,
    pub cliente: Option<String>,
    pub servicio: Option<String>,
    pub veterinario: Option<String>,
}

impl AppointmentWithLabels {
    pub fn into_dto(self) -> AppointmentDto {
        AppointmentDto {
            id: self.cita.id,
            id_mascota: self.cita.id_mascota,
            id_cliente: self.cita.id_cliente,
            fecha: self.cita.fecha,
            descripcion: self.cita.descripcion,
            estado: self.cita.estado,
            mascota: self.mascota,
            cliente: self.cliente,
            servicio: self.servicio,
            veterinario: self.veterinario,
        }
    }
}

/// Appointment with the pet and service labels the dashboards show.
pub struct DashboardAppointment {
    pub cita: entity::cita::Model,
    pub mascota: Option<String>,
    pub servicio: Option<String>,
}

/// Body of `PUT /Citas/Actualizar/{id}`. A state change goes through the
/// same transition rules as the dedicated endpoints.
#[derive(Deserialize, ToSchema)]
pub struct UpdateAppointmentDto {
    pub descripcion: Option<String>,
    pub estado: Option<String>,
}

/// Body of `POST /Citas/Registrar`. New appointments always start out pending.
#[derive(Deserialize, ToSchema)]
pub struct CreateAppointmentDto {
    pub id_mascota: i32,
    pub id_cliente: String,
    pub id_servicio: i32,
    pub id_veterinario: i32,
    pub fecha: DateTime<Utc>,
    pub descripcion: Option<String>,
}

/// Appointment of one pet, as returned by `GET /Citas/mascota/{id}`.
#[derive(Serialize, ToSchema)]
pub struct PetAppointmentDto {
    pub id: i32,
    pub fecha: DateTime<Utc>,
    pub descripcion: String,
    pub estado: String,
    pub servicio: Option<String>,
}
