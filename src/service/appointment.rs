//! Appointment booking and its status lifecycle.
//!
//! The lifecycle is a one-way street: Pendiente -> Confirmado -> Cancelado,
//! with a direct Pendiente -> Cancelado shortcut. Cancelado is terminal.
//! Every state change, including the one embedded in the free-form update
//! endpoint, goes through [`transition_allowed`].

use sea_orm::DatabaseConnection;

use crate::data::appointment::{
    AppointmentRepository, CITA_CANCELADO, CITA_CONFIRMADO, CITA_PENDIENTE,
};
use crate::data::pet::PetRepository;
use crate::error::AppError;
use crate::model::appointment::{
    AppointmentDto, CreateAppointmentDto, PetAppointmentDto, UpdateAppointmentDto,
};

/// Whether an appointment may move from `desde` to `hacia`.
fn transition_allowed(desde: &str, hacia: &str) -> bool {
    match (desde, hacia) {
        (CITA_PENDIENTE, CITA_CONFIRMADO) => true,
        (CITA_PENDIENTE, CITA_CANCELADO) => true,
        (CITA_CONFIRMADO, CITA_CANCELADO) => true,
        // Re-asserting the current state is a no-op, not an error.
        (desde, hacia) => desde == hacia,
    }
}

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<AppointmentDto>, AppError> {
        let repo = AppointmentRepository::new(self.db);
        let citas = repo.list_with_labels().await?;

        Ok(citas.into_iter().map(|c| c.into_dto()).collect())
    }

    pub async fn get(&self, id: i32) -> Result<AppointmentDto, AppError> {
        let repo = AppointmentRepository::new(self.db);

        repo.get_with_labels(id)
            .await?
            .map(|c| c.into_dto())
            .ok_or_else(|| AppError::NotFound("Cita no encontrada".to_string()))
    }

    pub async fn list_by_mascota(&self, id_mascota: i32) -> Result<Vec<PetAppointmentDto>, AppError> {
        let repo = AppointmentRepository::new(self.db);
        let citas = repo.list_by_mascota(id_mascota).await?;

        if citas.is_empty() {
            return Err(AppError::NotFound(
                "La mascota no tiene citas".to_string(),
            ));
        }

        Ok(citas
            .into_iter()
            .map(|(cita, servicio)| PetAppointmentDto {
                id: cita.id,
                fecha: cita.fecha,
                descripcion: cita.descripcion,
                estado: cita.estado,
                servicio: servicio.map(|s| s.servicio),
            })
            .collect())
    }

    /// Books an appointment. The referenced pet must belong to the
    /// referenced client, and new rows always start out pending.
    pub async fn create(&self, dto: CreateAppointmentDto) -> Result<(), AppError> {
        let mascota = PetRepository::new(self.db)
            .get(dto.id_mascota)
            .await?
            .ok_or_else(|| AppError::BadRequest("Mascota no existe".to_string()))?;

        if mascota.id_cliente != dto.id_cliente {
            return Err(AppError::BadRequest(
                "Mascota no coincide con cliente".to_string(),
            ));
        }

        let repo = AppointmentRepository::new(self.db);
        repo.create(dto).await?;

        Ok(())
    }

    /// Free-form update. A supplied estado still has to be a legal
    /// transition from the stored one.
    pub async fn update(&self, id: i32, dto: UpdateAppointmentDto) -> Result<(), AppError> {
        let repo = AppointmentRepository::new(self.db);
        let cita = repo
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cita no encontrada".to_string()))?;

        let estado = match dto.estado {
            Some(estado) => {
                if !transition_allowed(&cita.estado, &estado) {
                    return Err(AppError::BadRequest(format!(
                        "Transicion de estado invalida: {} -> {}",
                        cita.estado, estado
                    )));
                }
                estado
            }
            None => cita.estado.clone(),
        };

        repo.update(cita, dto.descripcion, &estado).await?;

        Ok(())
    }

    pub async fn confirm(&self, id: i32) -> Result<(), AppError> {
        self.transition(id, CITA_CONFIRMADO).await
    }

    pub async fn cancel(&self, id: i32) -> Result<(), AppError> {
        self.transition(id, CITA_CANCELADO).await
    }

    pub async fn mark_pending(&self, id: i32) -> Result<(), AppError> {
        self.transition(id, CITA_PENDIENTE).await
    }

    async fn transition(&self, id: i32, hacia: &str) -> Result<(), AppError> {
        let repo = AppointmentRepository::new(self.db);
        let cita = repo
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cita no encontrada".to_string()))?;

        if !transition_allowed(&cita.estado, hacia) {
            return Err(AppError::BadRequest(format!(
                "Transicion de estado invalida: {} -> {}",
                cita.estado, hacia
            )));
        }

        repo.set_estado(cita, hacia).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{
        builder::TestBuilder,
        factory::{cita::CitaFactory, create_cita, helpers::create_cliente_with_mascota},
    };

    #[test]
    fn transition_table_is_one_way() {
        assert!(transition_allowed(CITA_PENDIENTE, CITA_CONFIRMADO));
        assert!(transition_allowed(CITA_PENDIENTE, CITA_CANCELADO));
        assert!(transition_allowed(CITA_CONFIRMADO, CITA_CANCELADO));
        assert!(transition_allowed(CITA_PENDIENTE, CITA_PENDIENTE));

        assert!(!transition_allowed(CITA_CONFIRMADO, CITA_PENDIENTE));
        assert!(!transition_allowed(CITA_CANCELADO, CITA_PENDIENTE));
        assert!(!transition_allowed(CITA_CANCELADO, CITA_CONFIRMADO));
    }

    #[tokio::test]
    async fn confirm_fails_on_cancelled_and_leaves_row_unchanged() {
        let mut test = TestBuilder::new()
            .with_clinic_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        let (cliente, mascota) = create_cliente_with_mascota(db).await.unwrap();
        let cita = CitaFactory::new(db, mascota.id, &cliente.n_documento)
            .estado(CITA_CANCELADO)
            .build()
            .await
            .unwrap();

        let service = AppointmentService::new(db);
        let result = service.confirm(cita.id).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let stored = AppointmentRepository::new(db)
            .get(cita.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.estado, CITA_CANCELADO);
    }

    #[tokio::test]
    async fn cancel_succeeds_from_pending_and_confirmed() {
        let mut test = TestBuilder::new()
            .with_clinic_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        let (cliente, mascota) = create_cliente_with_mascota(db).await.unwrap();
        let pendiente = create_cita(db, mascota.id, &cliente.n_documento)
            .await
            .unwrap();
        let confirmada = CitaFactory::new(db, mascota.id, &cliente.n_documento)
            .estado(CITA_CONFIRMADO)
            .build()
            .await
            .unwrap();

        let service = AppointmentService::new(db);
        service.cancel(pendiente.id).await.unwrap();
        service.cancel(confirmada.id).await.unwrap();

        let repo = AppointmentRepository::new(db);
        assert_eq!(
            repo.get(pendiente.id).await.unwrap().unwrap().estado,
            CITA_CANCELADO
        );
        assert_eq!(
            repo.get(confirmada.id).await.unwrap().unwrap().estado,
            CITA_CANCELADO
        );
    }

    #[tokio::test]
    async fn create_rejects_pet_of_another_client() {
        let mut test = TestBuilder::new()
            .with_clinic_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        let (_, mascota) = create_cliente_with_mascota(db).await.unwrap();
        let (otro, _) = create_cliente_with_mascota(db).await.unwrap();
        let servicio = test_utils::factory::create_servicio(db).await.unwrap();
        let veterinario = test_utils::factory::create_veterinario(db).await.unwrap();

        let service = AppointmentService::new(db);
        let result = service
            .create(CreateAppointmentDto {
                id_mascota: mascota.id,
                id_cliente: otro.n_documento.clone(),
                id_servicio: servicio.id,
                id_veterinario: veterinario.id,
                fecha: chrono::Utc::now() + chrono::Duration::days(1),
                descripcion: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
