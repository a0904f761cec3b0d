use serde::Serialize;
use utoipa::ToSchema;

/// Document type as returned by `GET /tiposDocumento`.
#[derive(Serialize, ToSchema)]
pub struct DocumentTypeDto {
    pub id: i32,
    pub tipo: String,
}

impl From<entity::documento::Model> for DocumentTypeDto {
    fn from(model: entity::documento::Model) -> Self {
        Self {
            id: model.id,
            tipo: model.tipo,
        }
    }
}

/// Service catalog entry as returned by `GET /servicios/Listado`.
#[derive(Serialize, ToSchema)]
pub struct ServiceDto {
    pub id: i32,
    pub servicio: String,
}

impl From<entity::servicio::Model> for ServiceDto {
    fn from(model: entity::servicio::Model) -> Self {
        Self {
            id: model.id,
            servicio: model.servicio,
        }
    }
}
