use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Plain success message body.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MensajeDto {
    pub mensaje: String,
}

/// Health check body.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
