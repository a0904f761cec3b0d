//! HTTP handlers. Thin translation between the wire and the service layer.

pub mod appointment;
pub mod auth;
pub mod breed;
pub mod catalog;
pub mod dashboard;
pub mod disease;
pub mod pet;
pub mod reminder;
pub mod role;
pub mod species;
pub mod user;
pub mod veterinarian;

use axum::{response::IntoResponse, Json};

use crate::model::api::HealthDto;

pub static MISC_TAG: &str = "misc";

/// Liveness check.
#[utoipa::path(
    get,
    path = "/health",
    tag = MISC_TAG,
    responses(
        (status = 200, description = "Service is up", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}
