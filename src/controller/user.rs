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
        user::{CreateUserDto, UpdateUserDto, UserDetailDto, UserListDto},
    },
    service::user::UserService,
    state::AppState,
};

pub static USER_TAG: &str = "usuarios";

/// List every non-suspended user.
#[utoipa::path(
    get,
    path = "/usuario/Listado",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Active and pending users", body = UserListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    Ok(Json(service.list().await?))
}

/// Get one user by document number.
#[utoipa::path(
    get,
    path = "/usuario/{n_documento}",
    tag = USER_TAG,
    params(("n_documento" = String, Path, description = "Document number")),
    responses(
        (status = 200, description = "User found", body = UserDetailDto),
        (status = 404, description = "No such user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(n_documento): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    Ok(Json(service.get(&n_documento).await?))
}

/// Create a user with an explicit role (admin panel).
#[utoipa::path(
    post,
    path = "/usuario/Crear",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = MensajeDto),
        (status = 400, description = "Admin role requested for a non-reserved email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(MensajeDto {
            mensaje: "Usuario creado correctamente".to_string(),
        }),
    ))
}

/// Update a user's profile. Reactivates the account.
#[utoipa::path(
    put,
    path = "/usuario/Actualizar/{n_documento}",
    tag = USER_TAG,
    params(("n_documento" = String, Path, description = "Document number")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = MensajeDto),
        (status = 404, description = "No such user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(n_documento): Path<String>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    service.update(&n_documento, payload).await?;

    Ok(Json(MensajeDto {
        mensaje: "Usuario actualizado correctamente".to_string(),
    }))
}

/// Soft delete: flips the account to "Suspendido".
#[utoipa::path(
    put,
    path = "/usuario/Suspender/{n_documento}",
    tag = USER_TAG,
    params(("n_documento" = String, Path, description = "Document number")),
    responses(
        (status = 200, description = "User suspended", body = MensajeDto),
        (status = 404, description = "No such user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn suspend_user(
    State(state): State<AppState>,
    Path(n_documento): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    service.suspend(&n_documento).await?;

    Ok(Json(MensajeDto {
        mensaje: "Usuario suspendido".to_string(),
    }))
}

/// Flips the account back to "Activo".
#[utoipa::path(
    put,
    path = "/usuario/Reactivar/{n_documento}",
    tag = USER_TAG,
    params(("n_documento" = String, Path, description = "Document number")),
    responses(
        (status = 200, description = "User reactivated", body = MensajeDto),
        (status = 404, description = "No such user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reactivate_user(
    State(state): State<AppState>,
    Path(n_documento): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    service.reactivate(&n_documento).await?;

    Ok(Json(MensajeDto {
        mensaje: "Usuario reactivado".to_string(),
    }))
}

/// Flips the account to "Pendiente".
#[utoipa::path(
    put,
    path = "/usuario/Pendiente/{n_documento}",
    tag = USER_TAG,
    params(("n_documento" = String, Path, description = "Document number")),
    responses(
        (status = 200, description = "User marked pending", body = MensajeDto),
        (status = 404, description = "No such user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_user_pending(
    State(state): State<AppState>,
    Path(n_documento): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    service.mark_pending(&n_documento).await?;

    Ok(Json(MensajeDto {
        mensaje: "Usuario marcado como pendiente".to_string(),
    }))
}
