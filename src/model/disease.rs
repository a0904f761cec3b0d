use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct DiseaseDto {
    pub id: i32,
    pub nombre: String,
    pub descripcion: String,
}

impl From<entity::enfermedad::Model> for DiseaseDto {
    fn from(model: entity::enfermedad::Model) -> Self {
        Self {
            id: model.id,
            nombre: model.nombre,
            descripcion: model.descripcion,
        }
    }
}

/// Body of `POST /enfermedades/Crear` and `PUT /enfermedades/Actualizar/{id}`.
#[derive(Deserialize, ToSchema)]
pub struct SaveDiseaseDto {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
}
