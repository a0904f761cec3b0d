//! Media ingest for image-bearing entities.
//!
//! Uploaded files arrive as one multipart field named `imagen` plus plain
//! text fields. The bytes are buffered in memory, written to the local
//! upload directory under a per-entity folder with a timestamped filename,
//! and exposed through a public URL under the configured base URL. A cloud
//! object store would replace [`MediaStore`] wholesale; nothing outside this
//! module touches the filesystem.

use std::path::PathBuf;

use axum::extract::Multipart;
use chrono::Utc;
use std::collections::HashMap;

use crate::error::{storage::StorageError, AppError};

/// A single uploaded file buffered in memory.
pub struct UploadedFile {
    pub original_name: String,
    pub bytes: Vec<u8>,
}

/// Text fields and the optional `imagen` file extracted from a multipart
/// request.
pub struct UploadForm {
    pub fields: HashMap<String, String>,
    pub imagen: Option<UploadedFile>,
}

impl UploadForm {
    /// Drains a multipart stream into text fields plus the `imagen` file.
    ///
    /// Unknown file fields are ignored; `imagen` is the only file field
    /// the API accepts.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut fields = HashMap::new();
        let mut imagen = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| StorageError::Multipart(e.to_string()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == "imagen" {
                let original_name = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| "imagen".to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| StorageError::Multipart(e.to_string()))?;

                imagen = Some(UploadedFile {
                    original_name,
                    bytes: bytes.to_vec(),
                });
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| StorageError::Multipart(e.to_string()))?;
                fields.insert(name, value);
            }
        }

        Ok(Self { fields, imagen })
    }

    /// Gets a required text field, trimmed.
    pub fn require(&self, name: &str) -> Result<String, AppError> {
        match self.fields.get(name).map(|v| v.trim()) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(AppError::BadRequest("Faltan campos obligatorios".to_string())),
        }
    }

    /// Gets an optional text field.
    pub fn get(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }
}

/// Local-disk media store resolving public URLs under the app base URL.
#[derive(Clone)]
pub struct MediaStore {
    root: PathBuf,
    public_base: String,
}

impl MediaStore {
    /// Creates a store rooted at `upload_dir`, serving files under
    /// `{app_url}/uploads`.
    pub fn new(upload_dir: &str, app_url: &str) -> Self {
        Self {
            root: PathBuf::from(upload_dir),
            public_base: format!("{}/uploads", app_url.trim_end_matches('/')),
        }
    }

    /// Writes an uploaded file under `folder` and returns its public URL.
    ///
    /// The filename is prefixed with the current epoch milliseconds so
    /// repeated uploads of the same file never collide.
    pub async fn save(&self, folder: &str, file: &UploadedFile) -> Result<String, StorageError> {
        let filename = format!("{}_{}", Utc::now().timestamp_millis(), file.original_name);
        let dir = self.root.join(folder);
        let path = dir.join(&filename);

        tokio::fs::create_dir_all(&dir).await.map_err(|source| {
            StorageError::Write {
                path: dir.display().to_string(),
                source,
            }
        })?;

        tokio::fs::write(&path, &file.bytes)
            .await
            .map_err(|source| StorageError::Write {
                path: path.display().to_string(),
                source,
            })?;

        Ok(format!("{}/{}/{}", self.public_base, folder, filename))
    }
}
