use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct VeterinarianDto {
    pub id: i32,
    pub nombre_completo: String,
    pub estudios_especialidad: String,
    pub edad: i32,
    pub altura: f64,
    pub anios_experiencia: i32,
    pub imagen_url: Option<String>,
    pub activo: bool,
    pub creado_en: DateTime<Utc>,
}

impl From<entity::veterinario::Model> for VeterinarianDto {
    fn from(model: entity::veterinario::Model) -> Self {
        Self {
            id: model.id,
            nombre_completo: model.nombre_completo,
            estudios_especialidad: model.estudios_especialidad,
            edad: model.edad,
            altura: model.altura,
            anios_experiencia: model.anios_experiencia,
            imagen_url: model.imagen_url,
            activo: model.activo,
            creado_en: model.creado_en,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct CreateVeterinarianResponseDto {
    pub mensaje: String,
    pub id: i32,
    pub imagen_url: Option<String>,
}

/// Parameters for inserting a veterinarian profile.
pub struct CreateVeterinarianParams {
    pub nombre_completo: String,
    pub estudios_especialidad: String,
    pub edad: i32,
    pub altura: f64,
    pub anios_experiencia: i32,
    pub imagen_url: Option<String>,
}
