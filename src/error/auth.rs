use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Authentication and authorization failures.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No account matches the login email.
    ///
    /// Maps to 404; `/login` distinguishes unknown accounts from bad
    /// passwords.
    #[error("Usuario no encontrado")]
    UserNotFound,

    /// Password hash comparison failed.
    #[error("Contraseña incorrecta")]
    WrongPassword,

    /// Request carried no `Authorization: Bearer` header.
    #[error("Falta el token de autorización")]
    MissingToken,

    /// Token was malformed, expired or signed with the wrong key.
    #[error("Token inválido")]
    InvalidToken,

    /// Token is valid but its role claim does not grant this operation.
    ///
    /// The document number of the caller is logged for auditing.
    #[error("Acceso denegado para el usuario {0}")]
    AccessDenied(String),

    /// bcrypt failed to hash or verify a password.
    #[error(transparent)]
    Bcrypt(#[from] bcrypt::BcryptError),

    /// Token creation failed.
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::WrongPassword | Self::MissingToken | Self::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            Self::AccessDenied(n_documento) => {
                tracing::warn!("access denied for user {}", n_documento);
                StatusCode::UNAUTHORIZED
            }
            Self::Bcrypt(err) => {
                tracing::error!("bcrypt failure: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Jwt(err) => {
                tracing::error!("jwt failure: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = match status {
            StatusCode::INTERNAL_SERVER_ERROR => "Error interno del servidor".to_string(),
            _ => self.to_string(),
        };

        (status, Json(ErrorDto { error: body })).into_response()
    }
}
