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
        pet::PetRefDto,
        reminder::{PetReminderDto, ReminderDto, SaveReminderDto},
    },
    service::reminder::ReminderService,
    state::AppState,
};

pub static REMINDER_TAG: &str = "recordatorios";

#[utoipa::path(
    get,
    path = "/recordatorios",
    tag = REMINDER_TAG,
    responses(
        (status = 200, description = "All reminders", body = [ReminderDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_reminders(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ReminderService::new(&state.db);

    Ok(Json(service.list().await?))
}

/// Reminders of one pet; 404 when the pet has none.
#[utoipa::path(
    get,
    path = "/recordatorio/mascota/{id}",
    tag = REMINDER_TAG,
    params(("id" = i32, Path, description = "Pet id")),
    responses(
        (status = 200, description = "Reminders of the pet", body = [PetReminderDto]),
        (status = 404, description = "The pet has no reminders", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pet_reminders(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReminderService::new(&state.db);

    Ok(Json(service.list_by_mascota(id).await?))
}

/// First pet registered for an owner, used to pre-fill the reminder form.
#[utoipa::path(
    get,
    path = "/Mascota/recordatorio/{id}",
    tag = REMINDER_TAG,
    params(("id" = String, Path, description = "Owner document number")),
    responses(
        (status = 200, description = "First pet of the owner", body = PetRefDto),
        (status = 404, description = "The owner has no pets", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn first_pet_for_reminder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReminderService::new(&state.db);

    Ok(Json(service.first_pet_of_owner(&id).await?))
}

/// Save a reminder. The client must exist and own the referenced pet.
#[utoipa::path(
    post,
    path = "/recordatorios/guardar",
    tag = REMINDER_TAG,
    request_body = SaveReminderDto,
    responses(
        (status = 201, description = "Reminder saved", body = ReminderDto),
        (status = 400, description = "Missing fields or pet/client mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reminder(
    State(state): State<AppState>,
    Json(payload): Json<SaveReminderDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReminderService::new(&state.db);

    let created = service.save(payload).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/recordatorios/modificar/{id}",
    tag = REMINDER_TAG,
    params(("id" = i32, Path, description = "Reminder id")),
    request_body = SaveReminderDto,
    responses(
        (status = 200, description = "Reminder updated", body = MensajeDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 404, description = "No such reminder", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reminder(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SaveReminderDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReminderService::new(&state.db);

    service.update(id, payload).await?;

    Ok(Json(MensajeDto {
        mensaje: "Recordatorio actualizado correctamente".to_string(),
    }))
}

#[utoipa::path(
    delete,
    path = "/recordatorios/eliminar/{id}",
    tag = REMINDER_TAG,
    params(("id" = i32, Path, description = "Reminder id")),
    responses(
        (status = 200, description = "Reminder deleted", body = MensajeDto),
        (status = 404, description = "No such reminder", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reminder(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReminderService::new(&state.db);

    service.delete(id).await?;

    Ok(Json(MensajeDto {
        mensaje: "Recordatorio eliminado correctamente".to_string(),
    }))
}
