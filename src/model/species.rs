use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct SpeciesDto {
    pub id: i32,
    pub especie: String,
    pub imagen: Option<String>,
}

impl From<entity::especie::Model> for SpeciesDto {
    fn from(model: entity::especie::Model) -> Self {
        Self {
            id: model.id,
            especie: model.especie,
            imagen: model.imagen,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct SpeciesResponseDto {
    pub mensaje: String,
    pub data: SpeciesDto,
}
