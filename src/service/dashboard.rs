//! Role-specific dashboard aggregations.
//!
//! The veterinarian dashboard is deliberately unscoped and reports every
//! pet and every appointment in the clinic, whatever their status.

use sea_orm::DatabaseConnection;

use crate::data::appointment::AppointmentRepository;
use crate::data::pet::PetRepository;
use crate::data::user::UserRepository;
use crate::error::AppError;
use crate::model::appointment::DashboardAppointment;
use crate::model::dashboard::{
    AdminDashboardDto, ClientDashboardDto, DashboardAppointmentDto, DashboardUserDto,
    VetDashboardDto, VetStatsDto,
};
use crate::service::auth::{ROL_ADMIN, ROL_CLIENTE, ROL_VETERINARIO};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Admin overview: the first admin account plus the client and vet
    /// headcount.
    pub async fn admin(&self) -> Result<AdminDashboardDto, AppError> {
        let repo = UserRepository::new(self.db);

        let admin = repo
            .first_by_rol(ROL_ADMIN)
            .await?
            .ok_or_else(|| AppError::NotFound("No hay administradores".to_string()))?;

        let total_clientes = repo.count_by_roles(&[ROL_CLIENTE, ROL_VETERINARIO]).await?;

        Ok(AdminDashboardDto {
            usuario: DashboardUserDto {
                nombre: admin.nombre,
                correoelectronico: admin.correoelectronico,
            },
            total_clientes,
        })
    }

    /// Client overview: profile, their pets, their future appointments.
    pub async fn cliente(&self, n_documento: &str) -> Result<ClientDashboardDto, AppError> {
        let usuario = UserRepository::new(self.db)
            .get_by_documento(n_documento)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let mascotas = PetRepository::new(self.db)
            .list_active_by_cliente(n_documento)
            .await?;
        let citas = AppointmentRepository::new(self.db)
            .list_futuras_by_cliente(n_documento)
            .await?;

        Ok(ClientDashboardDto {
            usuario: DashboardUserDto {
                nombre: usuario.nombre,
                correoelectronico: usuario.correoelectronico,
            },
            mascotas: mascotas.into_iter().map(|m| m.into_list_item()).collect(),
            citas_pendientes: citas.into_iter().map(to_dashboard_dto).collect(),
        })
    }

    /// Veterinarian overview: profile plus every pet and every appointment
    /// in the clinic, with counts. The `citas_pendientes` key carries the
    /// full listing; its name is part of the wire contract.
    pub async fn veterinario(&self, n_documento: &str) -> Result<VetDashboardDto, AppError> {
        let usuario = UserRepository::new(self.db)
            .get_by_documento(n_documento)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let mascotas = PetRepository::new(self.db).list_all().await?;
        let citas = AppointmentRepository::new(self.db).list_dashboard().await?;

        Ok(VetDashboardDto {
            usuario: DashboardUserDto {
                nombre: usuario.nombre,
                correoelectronico: usuario.correoelectronico,
            },
            stats: VetStatsDto {
                mascotas_registradas: mascotas.len() as u64,
                citas_pendientes: citas.len() as u64,
            },
            mascotas: mascotas.into_iter().map(|m| m.into_list_item()).collect(),
            citas_pendientes: citas.into_iter().map(to_dashboard_dto).collect(),
        })
    }
}

fn to_dashboard_dto(cita: DashboardAppointment) -> DashboardAppointmentDto {
    DashboardAppointmentDto {
        id: cita.cita.id,
        id_mascota: cita.cita.id_mascota,
        fecha: cita.cita.fecha,
        descripcion: cita.cita.descripcion,
        mascota: cita.mascota,
        servicio: cita.servicio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{
        builder::TestBuilder,
        factory::{
            cita::CitaFactory,
            helpers::create_cliente_with_mascota,
            mascota::MascotaFactory,
            usuario::{create_admin, create_cliente, create_veterinario_user},
        },
    };

    #[tokio::test]
    async fn admin_requires_an_admin_account() {
        let mut test = TestBuilder::new()
            .with_clinic_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        create_cliente(db).await.unwrap();

        let result = DashboardService::new(db).admin().await;

        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "No hay administradores"));
    }

    #[tokio::test]
    async fn admin_counts_clients_and_vets_but_not_admins() {
        let mut test = TestBuilder::new()
            .with_clinic_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        let admin = create_admin(db).await.unwrap();
        create_cliente(db).await.unwrap();
        create_cliente(db).await.unwrap();
        create_veterinario_user(db).await.unwrap();

        let dashboard = DashboardService::new(db).admin().await.unwrap();

        assert_eq!(dashboard.usuario.nombre, admin.nombre);
        assert_eq!(dashboard.total_clientes, 3);
    }

    #[tokio::test]
    async fn veterinario_sees_every_pet_and_appointment_regardless_of_status() {
        let mut test = TestBuilder::new()
            .with_clinic_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        let vet = create_veterinario_user(db).await.unwrap();
        let (cliente, mascota) = create_cliente_with_mascota(db).await.unwrap();
        MascotaFactory::new(db, &cliente.n_documento)
            .estado("Suspendido")
            .build()
            .await
            .unwrap();

        CitaFactory::new(db, mascota.id, &cliente.n_documento)
            .build()
            .await
            .unwrap();
        CitaFactory::new(db, mascota.id, &cliente.n_documento)
            .estado("Cancelado")
            .build()
            .await
            .unwrap();

        let dashboard = DashboardService::new(db)
            .veterinario(&vet.n_documento)
            .await
            .unwrap();

        assert_eq!(dashboard.stats.mascotas_registradas, 2);
        assert_eq!(dashboard.stats.citas_pendientes, 2);
        assert_eq!(dashboard.citas_pendientes.len(), 2);
        assert_eq!(dashboard.mascotas.len(), 2);
    }
}
