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
        pet::{CreatePetDto, PetDetailDto, PetListItemDto, UpdatePetDto},
    },
    service::pet::PetService,
    state::AppState,
};

pub static PET_TAG: &str = "mascotas";

/// List every non-suspended pet with its species and breed labels.
#[utoipa::path(
    get,
    path = "/mascotas",
    tag = PET_TAG,
    responses(
        (status = 200, description = "Active pets", body = [PetListItemDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PetService::new(&state.db);

    Ok(Json(service.list().await?))
}

/// Get one pet by id. Suspended pets are still served here.
#[utoipa::path(
    get,
    path = "/Mascotas/{id}",
    tag = PET_TAG,
    params(("id" = i32, Path, description = "Pet id")),
    responses(
        (status = 200, description = "Pet found", body = PetDetailDto),
        (status = 404, description = "No such pet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PetService::new(&state.db);

    Ok(Json(service.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/Mascotas/Registro",
    tag = PET_TAG,
    request_body = CreatePetDto,
    responses(
        (status = 201, description = "Pet registered", body = MensajeDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pet(
    State(state): State<AppState>,
    Json(payload): Json<CreatePetDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PetService::new(&state.db);

    service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(MensajeDto {
            mensaje: "Mascota registrada correctamente".to_string(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/Mascotas/Actualizar/{id}",
    tag = PET_TAG,
    params(("id" = i32, Path, description = "Pet id")),
    request_body = UpdatePetDto,
    responses(
        (status = 200, description = "Pet updated", body = MensajeDto),
        (status = 404, description = "No such pet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePetDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PetService::new(&state.db);

    service.update(id, payload).await?;

    Ok(Json(MensajeDto {
        mensaje: "Mascota actualizada correctamente".to_string(),
    }))
}

/// Soft delete: the pet drops out of listings but keeps its row.
#[utoipa::path(
    put,
    path = "/Mascotas/Eliminar/{id}",
    tag = PET_TAG,
    params(("id" = i32, Path, description = "Pet id")),
    responses(
        (status = 200, description = "Pet suspended", body = MensajeDto),
        (status = 404, description = "No such pet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PetService::new(&state.db);

    service.suspend(id).await?;

    Ok(Json(MensajeDto {
        mensaje: "Mascota eliminada correctamente".to_string(),
    }))
}
