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
        appointment::{
            AppointmentDto, CreateAppointmentDto, PetAppointmentDto, UpdateAppointmentDto,
        },
    },
    service::appointment::AppointmentService,
    state::AppState,
};

pub static APPOINTMENT_TAG: &str = "citas";

#[utoipa::path(
    get,
    path = "/Citas/Listado",
    tag = APPOINTMENT_TAG,
    responses(
        (status = 200, description = "All appointments", body = [AppointmentDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = AppointmentService::new(&state.db);

    Ok(Json(service.list().await?))
}

#[utoipa::path(
    get,
    path = "/Citas/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Appointment found", body = AppointmentDto),
        (status = 404, description = "No such appointment", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = AppointmentService::new(&state.db);

    Ok(Json(service.get(id).await?))
}

/// Appointments of one pet; 404 when the pet has none.
#[utoipa::path(
    get,
    path = "/Citas/mascota/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Pet id")),
    responses(
        (status = 200, description = "Appointments of the pet", body = [PetAppointmentDto]),
        (status = 404, description = "The pet has no appointments", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pet_appointments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = AppointmentService::new(&state.db);

    Ok(Json(service.list_by_mascota(id).await?))
}

/// Book an appointment. The pet must exist and belong to the client.
#[utoipa::path(
    post,
    path = "/Citas/Registrar",
    tag = APPOINTMENT_TAG,
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Appointment booked", body = MensajeDto),
        (status = 400, description = "Unknown pet or pet/client mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(payload): Json<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AppointmentService::new(&state.db);

    service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(MensajeDto {
            mensaje: "Cita registrada correctamente".to_string(),
        }),
    ))
}

/// Update the description and, optionally, the state. State changes obey
/// the Pendiente -> Confirmado -> Cancelado progression.
#[utoipa::path(
    put,
    path = "/Citas/Actualizar/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment id")),
    request_body = UpdateAppointmentDto,
    responses(
        (status = 200, description = "Appointment updated", body = MensajeDto),
        (status = 400, description = "Illegal state transition", body = ErrorDto),
        (status = 404, description = "No such appointment", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AppointmentService::new(&state.db);

    service.update(id, payload).await?;

    Ok(Json(MensajeDto {
        mensaje: "Cita actualizada correctamente".to_string(),
    }))
}

#[utoipa::path(
    put,
    path = "/Citas/Confirmar/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Appointment confirmed", body = MensajeDto),
        (status = 400, description = "Illegal state transition", body = ErrorDto),
        (status = 404, description = "No such appointment", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = AppointmentService::new(&state.db);

    service.confirm(id).await?;

    Ok(Json(MensajeDto {
        mensaje: "Cita confirmada correctamente".to_string(),
    }))
}

#[utoipa::path(
    put,
    path = "/Citas/Cancelar/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Appointment cancelled", body = MensajeDto),
        (status = 400, description = "Illegal state transition", body = ErrorDto),
        (status = 404, description = "No such appointment", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = AppointmentService::new(&state.db);

    service.cancel(id).await?;

    Ok(Json(MensajeDto {
        mensaje: "Cita cancelada correctamente".to_string(),
    }))
}

/// Pendiente is the initial state, so this only succeeds on appointments
/// that are already pending.
#[utoipa::path(
    put,
    path = "/Citas/Pendiente/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Appointment marked pending", body = MensajeDto),
        (status = 400, description = "Illegal state transition", body = ErrorDto),
        (status = 404, description = "No such appointment", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_appointment_pending(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = AppointmentService::new(&state.db);

    service.mark_pending(id).await?;

    Ok(Json(MensajeDto {
        mensaje: "Cita marcada como pendiente".to_string(),
    }))
}
