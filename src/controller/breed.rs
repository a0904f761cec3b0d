use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    media::UploadForm,
    model::{
        api::{ErrorDto, MensajeDto},
        breed::{BreedDto, BreedResponseDto},
    },
    service::breed::BreedService,
    state::AppState,
};

pub static BREED_TAG: &str = "razas";

#[utoipa::path(
    get,
    path = "/Razas/Listado/{id_especie}",
    tag = BREED_TAG,
    params(("id_especie" = i32, Path, description = "Species id")),
    responses(
        (status = 200, description = "Breeds of the species", body = [BreedDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_breeds(
    State(state): State<AppState>,
    Path(id_especie): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BreedService::new(&state.db, &state.media);

    Ok(Json(service.list_by_especie(id_especie).await?))
}

#[utoipa::path(
    get,
    path = "/Razas/{id}",
    tag = BREED_TAG,
    params(("id" = i32, Path, description = "Breed id")),
    responses(
        (status = 200, description = "Breed found", body = BreedDto),
        (status = 404, description = "No such breed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_breed(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BreedService::new(&state.db, &state.media);

    Ok(Json(service.get(id).await?))
}

/// Create a breed under a species (multipart: `raza`, optional
/// `descripcion` and `imagen`).
#[utoipa::path(
    post,
    path = "/Razas/Crear/{id_especie}",
    tag = BREED_TAG,
    params(("id_especie" = i32, Path, description = "Species id")),
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Breed created", body = BreedResponseDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 404, description = "No such species", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_breed(
    State(state): State<AppState>,
    Path(id_especie): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = UploadForm::from_multipart(multipart).await?;
    let service = BreedService::new(&state.db, &state.media);

    let response = service.create(id_especie, form).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/Razas/Actualizar/{id}",
    tag = BREED_TAG,
    params(("id" = i32, Path, description = "Breed id")),
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Breed updated", body = BreedResponseDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 404, description = "No such breed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_breed(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = UploadForm::from_multipart(multipart).await?;
    let service = BreedService::new(&state.db, &state.media);

    Ok(Json(service.update(id, form).await?))
}

#[utoipa::path(
    delete,
    path = "/Razas/Eliminar/{id}",
    tag = BREED_TAG,
    params(("id" = i32, Path, description = "Breed id")),
    responses(
        (status = 200, description = "Breed deleted", body = MensajeDto),
        (status = 404, description = "No such breed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_breed(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BreedService::new(&state.db, &state.media);

    service.delete(id).await?;

    Ok(Json(MensajeDto {
        mensaje: "Raza eliminada correctamente".to_string(),
    }))
}
