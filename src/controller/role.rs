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
        role::{CreateRoleDto, CreateRoleResponseDto, RoleListDto},
    },
    service::role::RoleService,
    state::AppState,
};

pub static ROLE_TAG: &str = "roles";

#[utoipa::path(
    get,
    path = "/roles/Listado",
    tag = ROLE_TAG,
    responses(
        (status = 200, description = "All roles", body = RoleListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_roles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = RoleService::new(&state.db);

    Ok(Json(service.list().await?))
}

#[utoipa::path(
    post,
    path = "/roles/Crear",
    tag = ROLE_TAG,
    request_body = CreateRoleDto,
    responses(
        (status = 201, description = "Role created", body = CreateRoleResponseDto),
        (status = 400, description = "Blank role name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_role(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = RoleService::new(&state.db);

    let response = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/roles/Eliminar/{id}",
    tag = ROLE_TAG,
    params(("id" = i32, Path, description = "Role id")),
    responses(
        (status = 200, description = "Role deleted", body = MensajeDto),
        (status = 404, description = "No such role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = RoleService::new(&state.db);

    service.delete(id).await?;

    Ok(Json(MensajeDto {
        mensaje: "Rol eliminado correctamente".to_string(),
    }))
}
