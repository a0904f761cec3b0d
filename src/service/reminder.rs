//! Reminder management with cross-entity validation.
//!
//! Saving a reminder checks that the client exists and that the referenced
//! pet belongs to that client before inserting. The two reads and the
//! insert are not wrapped in a transaction.

use sea_orm::DatabaseConnection;

use crate::data::pet::PetRepository;
use crate::data::reminder::ReminderRepository;
use crate::data::user::UserRepository;
use crate::error::AppError;
use crate::model::pet::PetRefDto;
use crate::model::reminder::{PetReminderDto, ReminderDto, SaveReminderDto};

pub struct ReminderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReminderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<ReminderDto>, AppError> {
        let repo = ReminderRepository::new(self.db);
        let recordatorios = repo.list_with_pet().await?;

        Ok(recordatorios.into_iter().map(|r| r.into_dto()).collect())
    }

    pub async fn list_by_mascota(&self, id_mascota: i32) -> Result<Vec<PetReminderDto>, AppError> {
        let repo = ReminderRepository::new(self.db);
        let recordatorios = repo.list_by_mascota(id_mascota).await?;

        if recordatorios.is_empty() {
            return Err(AppError::NotFound(
                "La mascota no tiene recordatorios".to_string(),
            ));
        }

        Ok(recordatorios
            .into_iter()
            .map(|r| PetReminderDto {
                id: r.id,
                fecha: r.fecha,
                descripcion: r.descripcion,
                estado: r.estado,
            })
            .collect())
    }

    /// First pet registered for an owner, used by the reminder form.
    pub async fn first_pet_of_owner(&self, n_documento: &str) -> Result<PetRefDto, AppError> {
        let mascota = PetRepository::new(self.db)
            .first_by_cliente(n_documento)
            .await?
            .ok_or_else(|| AppError::NotFound("El cliente no tiene mascotas".to_string()))?;

        Ok(PetRefDto {
            id: mascota.id,
            nombre: mascota.nombre,
        })
    }

    pub async fn save(&self, dto: SaveReminderDto) -> Result<ReminderDto, AppError> {
        let id_cliente = match dto.cliente {
            Some(cliente) if !cliente.trim().is_empty() => cliente.trim().to_string(),
            _ => return Err(AppError::BadRequest("Faltan campos".to_string())),
        };
        let (id_mascota, fecha, descripcion) = match (dto.mascota, dto.fecha, dto.descripcion) {
            (Some(mascota), Some(fecha), Some(descripcion)) if !descripcion.trim().is_empty() => {
                (mascota, fecha, descripcion.trim().to_string())
            }
            _ => return Err(AppError::BadRequest("Faltan campos".to_string())),
        };

        if UserRepository::new(self.db)
            .get_by_documento(&id_cliente)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest("Cliente no existe".to_string()));
        }

        let mascota = PetRepository::new(self.db)
            .get(id_mascota)
            .await?
            .filter(|m| m.id_cliente == id_cliente);
        if mascota.is_none() {
            return Err(AppError::BadRequest(
                "Mascota no coincide con cliente".to_string(),
            ));
        }

        let repo = ReminderRepository::new(self.db);
        let created = repo.create(id_cliente, id_mascota, fecha, descripcion).await?;

        Ok(ReminderDto {
            id: created.id,
            id_cliente: created.id_cliente,
            id_mascota: created.id_mascota,
            fecha: created.fecha,
            descripcion: created.descripcion,
            estado: created.estado,
            mascota: None,
        })
    }

    pub async fn update(&self, id: i32, dto: SaveReminderDto) -> Result<(), AppError> {
        let (id_cliente, id_mascota, fecha, descripcion) =
            match (dto.cliente, dto.mascota, dto.fecha, dto.descripcion) {
                (Some(cliente), Some(mascota), Some(fecha), Some(descripcion)) => {
                    (cliente, mascota, fecha, descripcion)
                }
                _ => return Err(AppError::BadRequest("Faltan campos".to_string())),
            };

        let repo = ReminderRepository::new(self.db);
        repo.update(id, id_cliente, id_mascota, fecha, descripcion)
            .await?
            .ok_or_else(|| AppError::NotFound("Recordatorio no encontrado".to_string()))?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ReminderRepository::new(self.db);

        if repo.delete(id).await? == 0 {
            return Err(AppError::NotFound(
                "Recordatorio no encontrado".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sea_orm::{EntityTrait, PaginatorTrait};
    use test_utils::{builder::TestBuilder, factory::helpers::create_cliente_with_mascota};

    fn dto(cliente: &str, mascota: i32) -> SaveReminderDto {
        SaveReminderDto {
            cliente: Some(cliente.to_string()),
            mascota: Some(mascota),
            fecha: Some(Utc::now() + Duration::days(2)),
            descripcion: Some("Vacuna".to_string()),
        }
    }

    #[tokio::test]
    async fn save_rejects_unknown_client() {
        let mut test = TestBuilder::new()
            .with_clinic_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        let (_, mascota) = create_cliente_with_mascota(db).await.unwrap();

        let result = ReminderService::new(db).save(dto("9999", mascota.id)).await;

        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Cliente no existe"));
    }

    #[tokio::test]
    async fn save_rejects_pet_of_another_client_and_persists_nothing() {
        let mut test = TestBuilder::new()
            .with_clinic_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        let (_, mascota) = create_cliente_with_mascota(db).await.unwrap();
        let (otro, _) = create_cliente_with_mascota(db).await.unwrap();

        let result = ReminderService::new(db)
            .save(dto(&otro.n_documento, mascota.id))
            .await;

        assert!(
            matches!(result, Err(AppError::BadRequest(msg)) if msg == "Mascota no coincide con cliente")
        );

        let count = entity::prelude::Recordatorio::find()
            .count(db)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn save_inserts_active_reminder_for_owned_pet() {
        let mut test = TestBuilder::new()
            .with_clinic_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        let (cliente, mascota) = create_cliente_with_mascota(db).await.unwrap();

        let created = ReminderService::new(db)
            .save(dto(&cliente.n_documento, mascota.id))
            .await
            .unwrap();

        assert_eq!(created.id_cliente, cliente.n_documento);
        assert_eq!(created.id_mascota, mascota.id);
        assert_eq!(created.estado, "Activo");
    }
}
