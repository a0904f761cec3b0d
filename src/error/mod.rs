//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion
//! logic for transforming errors into HTTP responses. The `AppError` enum is
//! the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse`, so handlers can return `Result<_, AppError>` and let the
//! mapping happen in one place.

pub mod auth;
pub mod config;
pub mod storage;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError, storage::StorageError},
    model::api::ErrorDto,
};

/// Top-level application error type.
///
/// Aggregates every error that can occur while serving a request and maps
/// each to an HTTP status. Database and storage failures are logged
/// server-side and reported to the client with a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error (401).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM (500).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Media store failure while persisting an uploaded file (500).
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Resource not found (404).
    #[error("{0}")]
    NotFound(String),

    /// Invalid request input (400).
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging but returns a generic body so
/// implementation details never leak to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Error interno del servidor".to_string(),
            }),
        )
            .into_response()
    }
}
