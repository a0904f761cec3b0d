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
        species::{SpeciesDto, SpeciesResponseDto},
    },
    service::species::SpeciesService,
    state::AppState,
};

pub static SPECIES_TAG: &str = "especies";

#[utoipa::path(
    get,
    path = "/Especies/Listado",
    tag = SPECIES_TAG,
    responses(
        (status = 200, description = "All species", body = [SpeciesDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_species(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = SpeciesService::new(&state.db, &state.media);

    Ok(Json(service.list().await?))
}

#[utoipa::path(
    get,
    path = "/Especies/{id}",
    tag = SPECIES_TAG,
    params(("id" = i32, Path, description = "Species id")),
    responses(
        (status = 200, description = "Species found", body = SpeciesDto),
        (status = 404, description = "No such species", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_species(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = SpeciesService::new(&state.db, &state.media);

    Ok(Json(service.get(id).await?))
}

/// Create a species from a multipart form (`Especie` text plus optional
/// `imagen` file).
#[utoipa::path(
    post,
    path = "/Especies/Crear",
    tag = SPECIES_TAG,
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Species created", body = SpeciesResponseDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_species(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = UploadForm::from_multipart(multipart).await?;
    let service = SpeciesService::new(&state.db, &state.media);

    let response = service.create(form).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Update a species; the image is only replaced when a new file arrives.
#[utoipa::path(
    put,
    path = "/Especies/Actualizar/{id}",
    tag = SPECIES_TAG,
    params(("id" = i32, Path, description = "Species id")),
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Species updated", body = SpeciesResponseDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 404, description = "No such species", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_species(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = UploadForm::from_multipart(multipart).await?;
    let service = SpeciesService::new(&state.db, &state.media);

    Ok(Json(service.update(id, form).await?))
}

#[utoipa::path(
    delete,
    path = "/Especies/Eliminar/{id}",
    tag = SPECIES_TAG,
    params(("id" = i32, Path, description = "Species id")),
    responses(
        (status = 200, description = "Species deleted", body = MensajeDto),
        (status = 404, description = "No such species", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_species(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = SpeciesService::new(&state.db, &state.media);

    service.delete(id).await?;

    Ok(Json(MensajeDto {
        mensaje: "Especie eliminada correctamente".to_string(),
    }))
}
