use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::ErrorDto,
        dashboard::{AdminDashboardDto, ClientDashboardDto, VetDashboardDto},
    },
    service::dashboard::DashboardService,
    state::AppState,
};

pub static DASHBOARD_TAG: &str = "dashboards";

/// Admin overview. Requires a bearer token with the admin role.
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    tag = DASHBOARD_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Admin dashboard", body = AdminDashboardDto),
        (status = 401, description = "Missing or invalid token, or wrong role", body = ErrorDto),
        (status = 404, description = "No admin account exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt_secret, &headers).require(Permission::Admin)?;

    let service = DashboardService::new(&state.db);

    Ok(Json(service.admin().await?))
}

/// Client overview. Requires a bearer token with the client role.
#[utoipa::path(
    get,
    path = "/cliente/dashboard/{n_documento}",
    tag = DASHBOARD_TAG,
    security(("bearer_auth" = [])),
    params(("n_documento" = String, Path, description = "Client document number")),
    responses(
        (status = 200, description = "Client dashboard", body = ClientDashboardDto),
        (status = 401, description = "Missing or invalid token, or wrong role", body = ErrorDto),
        (status = 404, description = "No such user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn client_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(n_documento): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt_secret, &headers).require(Permission::Cliente)?;

    let service = DashboardService::new(&state.db);

    Ok(Json(service.cliente(&n_documento).await?))
}

/// Veterinarian overview. Requires a bearer token with the vet role.
#[utoipa::path(
    get,
    path = "/veterinario/dashboard/{n_documento}",
    tag = DASHBOARD_TAG,
    security(("bearer_auth" = [])),
    params(("n_documento" = String, Path, description = "Veterinarian document number")),
    responses(
        (status = 200, description = "Veterinarian dashboard", body = VetDashboardDto),
        (status = 401, description = "Missing or invalid token, or wrong role", body = ErrorDto),
        (status = 404, description = "No such user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn veterinarian_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(n_documento): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt_secret, &headers).require(Permission::Veterinario)?;

    let service = DashboardService::new(&state.db);

    Ok(Json(service.veterinario(&n_documento).await?))
}
