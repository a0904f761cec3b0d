use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    model::{
        api::ErrorDto,
        auth::{LoginDto, LoginResponseDto, RegisterDto, RegisterResponseDto},
    },
    service::auth::AuthService,
    state::AppState,
};

pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// The role is derived from the email address; the reserved clinic
/// addresses yield the admin and veterinarian roles, everything else is a
/// client.
#[utoipa::path(
    post,
    path = "/registro",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = RegisterResponseDto),
        (status = 400, description = "Missing fields, short password or duplicated email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt_secret);

    let response = service.register(payload).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Log in with email and password.
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials accepted, session token issued", body = LoginResponseDto),
        (status = 401, description = "Wrong password", body = ErrorDto),
        (status = 404, description = "Unknown email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt_secret);

    let response = service.login(payload).await?;

    Ok(Json(response))
}
