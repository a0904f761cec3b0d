use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct BreedDto {
    pub id: i32,
    pub raza: String,
    pub descripcion: Option<String>,
    pub imagen: Option<String>,
    pub id_especie: i32,
}

impl From<entity::raza::Model> for BreedDto {
    fn from(model: entity::raza::Model) -> Self {
        Self {
            id: model.id,
            raza: model.raza,
            descripcion: model.descripcion,
            imagen: model.imagen,
            id_especie: model.id_especie,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct BreedResponseDto {
    pub mensaje: String,
    pub data: BreedDto,
}
