use sea_orm::DatabaseConnection;

use crate::data::veterinarian::VeterinarianRepository;
use crate::error::AppError;
use crate::media::{MediaStore, UploadForm};
use crate::model::veterinarian::{
    CreateVeterinarianParams, CreateVeterinarianResponseDto, VeterinarianDto,
};

const FOLDER: &str = "veterinarios";

pub struct VeterinarianService<'a> {
    db: &'a DatabaseConnection,
    media: &'a MediaStore,
}

impl<'a> VeterinarianService<'a> {
    pub fn new(db: &'a DatabaseConnection, media: &'a MediaStore) -> Self {
        Self { db, media }
    }

    pub async fn list(&self) -> Result<Vec<VeterinarianDto>, AppError> {
        let repo = VeterinarianRepository::new(self.db);
        let veterinarios = repo.list_active().await?;

        Ok(veterinarios.into_iter().map(VeterinarianDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<VeterinarianDto, AppError> {
        let repo = VeterinarianRepository::new(self.db);

        repo.get(id)
            .await?
            .map(VeterinarianDto::from)
            .ok_or_else(|| AppError::NotFound("Veterinario no encontrado".to_string()))
    }

    /// Creates an active profile from a multipart form. The three numeric
    /// fields arrive as text and must parse.
    pub async fn create(
        &self,
        form: UploadForm,
    ) -> Result<CreateVeterinarianResponseDto, AppError> {
        let nombre_completo = form.require("nombre_completo")?;
        let estudios_especialidad = form.require("estudios_especialidad")?;
        let edad: i32 = parse_numeric(&form, "edad")?;
        let altura: f64 = parse_numeric(&form, "altura")?;
        let anios_experiencia: i32 = parse_numeric(&form, "anios_experiencia")?;

        let imagen_url = match &form.imagen {
            Some(file) => Some(self.media.save(FOLDER, file).await?),
            None => None,
        };

        let repo = VeterinarianRepository::new(self.db);
        let created = repo
            .create(CreateVeterinarianParams {
                nombre_completo,
                estudios_especialidad,
                edad,
                altura,
                anios_experiencia,
                imagen_url,
            })
            .await?;

        Ok(CreateVeterinarianResponseDto {
            mensaje: "Veterinario creado correctamente".to_string(),
            id: created.id,
            imagen_url: created.imagen_url,
        })
    }

    pub async fn deactivate(&self, id: i32) -> Result<(), AppError> {
        let repo = VeterinarianRepository::new(self.db);

        repo.deactivate(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Veterinario no encontrado".to_string()))?;

        Ok(())
    }
}

fn parse_numeric<T: std::str::FromStr>(form: &UploadForm, name: &str) -> Result<T, AppError> {
    form.require(name)?
        .parse()
        .map_err(|_| AppError::BadRequest(format!("El campo {} debe ser numerico", name)))
}
