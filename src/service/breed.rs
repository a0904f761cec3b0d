use sea_orm::DatabaseConnection;

use crate::data::breed::BreedRepository;
use crate::data::species::SpeciesRepository;
use crate::error::AppError;
use crate::media::{MediaStore, UploadForm};
use crate::model::breed::{BreedDto, BreedResponseDto};

const FOLDER: &str = "razas";

pub struct BreedService<'a> {
    db: &'a DatabaseConnection,
    media: &'a MediaStore,
}

impl<'a> BreedService<'a> {
    pub fn new(db: &'a DatabaseConnection, media: &'a MediaStore) -> Self {
        Self { db, media }
    }

    pub async fn list_by_especie(&self, id_especie: i32) -> Result<Vec<BreedDto>, AppError> {
        let repo = BreedRepository::new(self.db);
        let razas = repo.list_by_especie(id_especie).await?;

        Ok(razas.into_iter().map(BreedDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<BreedDto, AppError> {
        let repo = BreedRepository::new(self.db);

        repo.get(id)
            .await?
            .map(BreedDto::from)
            .ok_or_else(|| AppError::NotFound("Raza no encontrada".to_string()))
    }

    /// Creates a breed under an existing species.
    pub async fn create(
        &self,
        id_especie: i32,
        form: UploadForm,
    ) -> Result<BreedResponseDto, AppError> {
        if SpeciesRepository::new(self.db).get(id_especie).await?.is_none() {
            return Err(AppError::NotFound("Especie no encontrada".to_string()));
        }

        let raza = form.require("raza")?;
        let descripcion = form.get("descripcion");
        let imagen = self.store_image(&form).await?;

        let repo = BreedRepository::new(self.db);
        let created = repo.create(raza, descripcion, imagen, id_especie).await?;

        Ok(BreedResponseDto {
            mensaje: "Raza creada correctamente".to_string(),
            data: created.into(),
        })
    }

    pub async fn update(&self, id: i32, form: UploadForm) -> Result<BreedResponseDto, AppError> {
        let raza = form.require("raza")?;
        let descripcion = form.get("descripcion");
        let id_especie = form
            .require("id_especie")?
            .parse()
            .map_err(|_| AppError::BadRequest("id_especie invalido".to_string()))?;
        let imagen = self.store_image(&form).await?;

        let repo = BreedRepository::new(self.db);
        let updated = repo
            .update(id, raza, descripcion, imagen, id_especie)
            .await?
            .ok_or_else(|| AppError::NotFound("Raza no encontrada".to_string()))?;

        Ok(BreedResponseDto {
            mensaje: "Raza actualizada correctamente".to_string(),
            data: updated.into(),
        })
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = BreedRepository::new(self.db);

        if repo.delete(id).await? == 0 {
            return Err(AppError::NotFound("Raza no encontrada".to_string()));
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
