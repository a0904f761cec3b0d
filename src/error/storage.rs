use thiserror::Error;

/// Media store failures while persisting uploaded files.
///
/// An upload failure aborts the enclosing entity write; there is no cleanup
/// of files already written when the database insert later fails.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem error while writing the uploaded bytes.
    #[error("Failed to write upload {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    /// The multipart stream could not be read.
    #[error("Failed to read multipart field: {0}")]
    Multipart(String),
}
