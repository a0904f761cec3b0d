use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::pet::PetListItemDto;

#[derive(Serialize, ToSchema)]
pub struct DashboardUserDto {
    pub nombre: String,
    pub correoelectronico: String,
}

/// Body of `GET /admin/dashboard`.
#[derive(Serialize, ToSchema)]
pub struct AdminDashboardDto {
    pub usuario: DashboardUserDto,
    pub total_clientes: u64,
}

/// Appointment row as shown on the client and vet dashboards.
#[derive(Serialize, ToSchema)]
pub struct DashboardAppointmentDto {
    pub id: i32,
    pub id_mascota: i32,
    pub fecha: DateTime<Utc>,
    pub descripcion: String,
    pub mascota: Option<String>,
    pub servicio: Option<String>,
}

/// Body of `GET /cliente/dashboard`.
#[derive(Serialize, ToSchema)]
pub struct ClientDashboardDto {
    pub usuario: DashboardUserDto,
    pub mascotas: Vec<PetListItemDto>,
    pub citas_pendientes: Vec<DashboardAppointmentDto>,
}

#[derive(Serialize, ToSchema)]
pub struct VetStatsDto {
    pub mascotas_registradas: u64,
    pub citas_pendientes: u64,
}

/// Body of `GET /veterinario/dashboard`.
#[derive(Serialize, ToSchema)]
pub struct VetDashboardDto {
    pub usuario: DashboardUserDto,
    pub stats: VetStatsDto,
    pub mascotas: Vec<PetListItemDto>,
    pub citas_pendientes: Vec<DashboardAppointmentDto>,
}
