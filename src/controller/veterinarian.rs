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
        veterinarian::{CreateVeterinarianResponseDto, VeterinarianDto},
    },
    service::veterinarian::VeterinarianService,
    state::AppState,
};

pub static VETERINARIAN_TAG: &str = "veterinarios";

/// Create a veterinarian profile (multipart; numeric fields arrive as
/// text and must parse).
#[utoipa::path(
    post,
    path = "/veterinarios/crear",
    tag = VETERINARIAN_TAG,
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Profile created", body = CreateVeterinarianResponseDto),
        (status = 400, description = "Missing or non-numeric fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_veterinarian(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = UploadForm::from_multipart(multipart).await?;
    let service = VeterinarianService::new(&state.db, &state.media);

    let response = service.create(form).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// List active profiles, newest first.
#[utoipa::path(
    get,
    path = "/veterinarios",
    tag = VETERINARIAN_TAG,
    responses(
        (status = 200, description = "Active veterinarians", body = [VeterinarianDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_veterinarians(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = VeterinarianService::new(&state.db, &state.media);

    Ok(Json(service.list().await?))
}

/// Get one profile by id. Deactivated profiles are still served here.
#[utoipa::path(
    get,
    path = "/veterinarios/{id}",
    tag = VETERINARIAN_TAG,
    params(("id" = i32, Path, description = "Veterinarian id")),
    responses(
        (status = 200, description = "Profile found", body = VeterinarianDto),
        (status = 404, description = "No such veterinarian", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_veterinarian(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = VeterinarianService::new(&state.db, &state.media);

    Ok(Json(service.get(id).await?))
}

/// Soft delete: deactivates the profile.
#[utoipa::path(
    delete,
    path = "/veterinarios/{id}",
    tag = VETERINARIAN_TAG,
    params(("id" = i32, Path, description = "Veterinarian id")),
    responses(
        (status = 200, description = "Profile deactivated", body = MensajeDto),
        (status = 404, description = "No such veterinarian", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_veterinarian(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = VeterinarianService::new(&state.db, &state.media);

    service.deactivate(id).await?;

    Ok(Json(MensajeDto {
        mensaje: "Veterinario eliminado correctamente".to_string(),
    }))
}
