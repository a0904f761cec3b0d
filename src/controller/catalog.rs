use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    error::AppError,
    model::{
        api::ErrorDto,
        catalog::{DocumentTypeDto, ServiceDto},
    },
    service::catalog::CatalogService,
    state::AppState,
};

pub static CATALOG_TAG: &str = "catalogos";

#[utoipa::path(
    get,
    path = "/tiposDocumento",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Document types", body = [DocumentTypeDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_document_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db);

    Ok(Json(service.list_document_types().await?))
}

#[utoipa::path(
    get,
    path = "/servicios/Listado",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Service catalog", body = [ServiceDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_services(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db);

    Ok(Json(service.list_services().await?))
}
