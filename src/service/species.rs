use sea_orm::DatabaseConnection;

use crate::data::species::SpeciesRepository;
use crate::error::AppError;
use crate::media::{MediaStore, UploadForm};
use crate::model::species::{SpeciesDto, SpeciesResponseDto};

const FOLDER: &str = "especies";

pub struct SpeciesService<'a> {
    db: &'a DatabaseConnection,
    media: &'a MediaStore,
}

impl<'a> SpeciesService<'a> {
    pub fn new(db: &'a DatabaseConnection, media: &'a MediaStore) -> Self {
        Self { db, media }
    }

    pub async fn list(&self) -> Result<Vec<SpeciesDto>, AppError> {
        let repo = SpeciesRepository::new(self.db);
        let especies = repo.list().await?;

        Ok(especies.into_iter().map(SpeciesDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<SpeciesDto, AppError> {
        let repo = SpeciesRepository::new(self.db);

        repo.get(id)
            .await?
            .map(SpeciesDto::from)
            .ok_or_else(|| AppError::NotFound("Especie no encontrada".to_string()))
    }

    /// Creates a species from a multipart form, persisting the optional
    /// image first so only its public URL reaches the database.
    pub async fn create(&self, form: UploadForm) -> Result<SpeciesResponseDto, AppError> {
        let especie = form.require("Especie")?;
        let imagen = self.store_image(&form).await?;

        let repo = SpeciesRepository::new(self.db);
        let created = repo.create(especie, imagen).await?;

        Ok(SpeciesResponseDto {
            mensaje: "Especie creada correctamente".to_string(),
            data: created.into(),
        })
    }

    /// Updates the label; the stored image survives unless a new file came
    /// with the form.
    pub async fn update(&self, id: i32, form: UploadForm) -> Result<SpeciesResponseDto, AppError> {
        let especie = form.require("Especie")?;
        let imagen = self.store_image(&form).await?;

        let repo = SpeciesRepository::new(self.db);
        let updated = repo
            .update(id, especie, imagen)
            .await?
            .ok_or_else(|| AppError::NotFound("Especie no encontrada".to_string()))?;

        Ok(SpeciesResponseDto {
            mensaje: "Especie actualizada correctamente".to_string(),
            data: updated.into(),
        })
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = SpeciesRepository::new(self.db);

        if repo.delete(id).await? == 0 {
            return Err(AppError::NotFound("Especie no encontrada".to_string()));
        }

        Ok(())
    }

    async fn store_image(&self, form: &UploadForm) -> Result<Option<String>, AppError> {
        match &form.imagen {
            Some(file) => Ok(Some(self.media.save(FOLDER, file).await?)),
            None => Ok(None),
        }
    }
}
