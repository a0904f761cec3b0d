use sea_orm::DatabaseConnection;

use crate::data::pet::PetRepository;
use crate::error::AppError;
use crate::model::pet::{CreatePetDto, PetDetailDto, PetListItemDto, UpdatePetDto};

pub struct PetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<PetListItemDto>, AppError> {
        let repo = PetRepository::new(self.db);
        let mascotas = repo.list_active().await?;

        Ok(mascotas.into_iter().map(|m| m.into_list_item()).collect())
    }

    pub async fn get(&self, id: i32) -> Result<PetDetailDto, AppError> {
        let repo = PetRepository::new(self.db);

        repo.get_with_labels(id)
            .await?
            .map(|m| m.into_detail())
            .ok_or_else(|| AppError::NotFound("Mascota no encontrada".to_string()))
    }

    pub async fn create(&self, dto: CreatePetDto) -> Result<(), AppError> {
        if dto.nombre.trim().is_empty() {
            return Err(AppError::BadRequest("Faltan campos".to_string()));
        }

        let repo = PetRepository::new(self.db);
        repo.create(dto).await?;

        Ok(())
    }

    pub async fn update(&self, id: i32, dto: UpdatePetDto) -> Result<(), AppError> {
        let repo = PetRepository::new(self.db);

        repo.update(id, dto.nombre, dto.estado)
            .await?
            .ok_or_else(|| AppError::NotFound("Mascota no encontrada".to_string()))?;

        Ok(())
    }

    /// Soft delete. The pet drops out of listings but stays readable.
    pub async fn suspend(&self, id: i32) -> Result<(), AppError> {
        let repo = PetRepository::new(self.db);

        repo.suspend(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mascota no encontrada".to_string()))?;

        Ok(())
    }
}
