use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

/// Read-only lookups for the document type and service catalogs.
pub struct CatalogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_document_types(&self) -> Result<Vec<entity::documento::Model>, DbErr> {
        entity::prelude::Documento::find()
            .order_by_asc(entity::documento::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn list_services(&self) -> Result<Vec<entity::servicio::Model>, DbErr> {
        entity::prelude::Servicio::find()
            .order_by_asc(entity::servicio::Column::Id)
            .all(self.db)
            .await
    }
}
