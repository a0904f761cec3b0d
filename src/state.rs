//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned for each request
//! through Axum's state extraction. Every field is cheap to clone: the
//! database connection is a pooled handle, the media store holds a path and
//! a base URL, and the JWT secret is a string.

use sea_orm::DatabaseConnection;

use crate::media::MediaStore;

/// Shared resources handed to every handler instead of module globals.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (bounded to 10 connections).
    pub db: DatabaseConnection,

    /// Local-disk media store for uploaded entity images.
    pub media: MediaStore,

    /// HMAC secret for signing and verifying session tokens.
    pub jwt_secret: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, media: MediaStore, jwt_secret: String) -> Self {
        Self {
            db,
            media,
            jwt_secret,
        }
    }
}
