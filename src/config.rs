use crate::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,

    /// Public base URL used when resolving uploaded image URLs.
    pub app_url: String,

    /// Directory uploaded images are written to and served from.
    pub upload_dir: String,

    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            app_url: std::env::var("APP_URL")
                .map_err(|_| ConfigError::MissingEnvVar("APP_URL".to_string()))?,
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
            port,
        })
    }
}
