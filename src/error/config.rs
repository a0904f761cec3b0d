use thiserror::Error;

/// Configuration problems detected at startup. Always fatal.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is absent.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is present but unparseable.
    #[error("Invalid value for environment variable {name}: {value}")]
    InvalidEnvVar { name: String, value: String },
}
