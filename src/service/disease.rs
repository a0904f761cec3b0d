use sea_orm::DatabaseConnection;

use crate::data::disease::DiseaseRepository;
use crate::error::AppError;
use crate::model::disease::{DiseaseDto, SaveDiseaseDto};

pub struct DiseaseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiseaseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<DiseaseDto>, AppError> {
        let repo = DiseaseRepository::new(self.db);
        let enfermedades = repo.list().await?;

        Ok(enfermedades.into_iter().map(DiseaseDto::from).collect())
    }

    pub async fn create(&self, dto: SaveDiseaseDto) -> Result<DiseaseDto, AppError> {
        let (nombre, descripcion) = match (clean(dto.nombre), clean(dto.descripcion)) {
            (Some(nombre), Some(descripcion)) => (nombre, descripcion),
            _ => {
                return Err(AppError::BadRequest(
                    "Nombre y descripcion son obligatorios".to_string(),
                ))
            }
        };

        let repo = DiseaseRepository::new(self.db);
        let created = repo.create(nombre, descripcion).await?;

        Ok(created.into())
    }

    /// Partial update: at least one of the two fields must be supplied.
    pub async fn update(&self, id: i32, dto: SaveDiseaseDto) -> Result<DiseaseDto, AppError> {
        let nombre = clean(dto.nombre);
        let descripcion = clean(dto.descripcion);

        if nombre.is_none() && descripcion.is_none() {
            return Err(AppError::BadRequest(
                "Nada que actualizar".to_string(),
            ));
        }

        let repo = DiseaseRepository::new(self.db);
        let updated = repo
            .update(id, nombre, descripcion)
            .await?
            .ok_or_else(|| AppError::NotFound("Enfermedad no encontrada".to_string()))?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = DiseaseRepository::new(self.db);

        if repo.delete(id).await? == 0 {
            return Err(AppError::NotFound("Enfermedad no encontrada".to_string()));
        }

        Ok(())
    }
}

fn clean(field: Option<String>) -> Option<String> {
    field
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::EntityTrait;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn create_requires_both_fields() {
        let mut test = TestBuilder::new()
            .with_clinic_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        let result = DiseaseService::new(db)
            .create(SaveDiseaseDto {
                nombre: Some("Parvovirus".to_string()),
                descripcion: Some("   ".to_string()),
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::BadRequest(msg)) if msg == "Nombre y descripcion son obligatorios"
        ));
    }

    #[tokio::test]
    async fn update_rejects_blank_payload_and_keeps_row() {
        let mut test = TestBuilder::new()
            .with_clinic_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        let enfermedad = factory::create_enfermedad(db).await.unwrap();

        let result = DiseaseService::new(db)
            .update(
                enfermedad.id,
                SaveDiseaseDto {
                    nombre: None,
                    descripcion: Some("  ".to_string()),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Nada que actualizar"));

        let stored = entity::prelude::Enfermedad::find_by_id(enfermedad.id)
            .one(db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.nombre, enfermedad.nombre);
        assert_eq!(stored.descripcion, enfermedad.descripcion);
    }

    #[tokio::test]
    async fn update_changes_only_the_supplied_field() {
        let mut test = TestBuilder::new()
            .with_clinic_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        let enfermedad = factory::create_enfermedad(db).await.unwrap();

        let updated = DiseaseService::new(db)
            .update(
                enfermedad.id,
                SaveDiseaseDto {
                    nombre: Some("Moquillo".to_string()),
                    descripcion: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.nombre, "Moquillo");
        assert_eq!(updated.descripcion, enfermedad.descripcion);
    }
}
