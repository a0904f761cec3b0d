use sea_orm::DatabaseConnection;

use crate::data::catalog::CatalogRepository;
use crate::error::AppError;
use crate::model::catalog::{DocumentTypeDto, ServiceDto};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_document_types(&self) -> Result<Vec<DocumentTypeDto>, AppError> {
        let repo = CatalogRepository::new(self.db);
        let tipos = repo.list_document_types().await?;

        Ok(tipos.into_iter().map(DocumentTypeDto::from).collect())
    }

    pub async fn list_services(&self) -> Result<Vec<ServiceDto>, AppError> {
        let repo = CatalogRepository::new(self.db);
        let servicios = repo.list_services().await?;

        Ok(servicios.into_iter().map(ServiceDto::from).collect())
    }
}
