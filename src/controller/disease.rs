use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::{ErrorDto, MensajeDto},
        disease::{DiseaseDto, SaveDiseaseDto},
    },
    service::disease::DiseaseService,
    state::AppState,
};

pub static DISEASE_TAG: &str = "enfermedades";

#[utoipa::path(
    get,
    path = "/Enfermedades/Listado",
    tag = DISEASE_TAG,
    responses(
        (status = 200, description = "All diseases", body = [DiseaseDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_diseases(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = DiseaseService::new(&state.db);

    Ok(Json(service.list().await?))
}

#[utoipa::path(
    post,
    path = "/Enfermedades/Registrar",
    tag = DISEASE_TAG,
    request_body = SaveDiseaseDto,
    responses(
        (status = 201, description = "Disease registered", body = DiseaseDto),
        (status = 400, description = "Blank name or description", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_disease(
    State(state): State<AppState>,
    Json(payload): Json<SaveDiseaseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DiseaseService::new(&state.db);

    let created = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/Enfermedades/Actualizar/{id}",
    tag = DISEASE_TAG,
    params(("id" = i32, Path, description = "Disease id")),
    request_body = SaveDiseaseDto,
    responses(
        (status = 200, description = "Disease updated", body = DiseaseDto),
        (status = 400, description = "Nothing to update", body = ErrorDto),
        (status = 404, description = "No such disease", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_disease(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SaveDiseaseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DiseaseService::new(&state.db);

    Ok(Json(service.update(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/Enfermedades/Eliminar/{id}",
    tag = DISEASE_TAG,
    params(("id" = i32, Path, description = "Disease id")),
    responses(
        (status = 200, description = "Disease deleted", body = MensajeDto),
        (status = 404, description = "No such disease", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_disease(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DiseaseService::new(&state.db);

    service.delete(id).await?;

    Ok(Json(MensajeDto {
        mensaje: "Enfermedad eliminada correctamente".to_string(),
    }))
}
