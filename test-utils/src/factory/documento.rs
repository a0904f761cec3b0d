use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a document type row with a generated label.
pub async fn create_documento(db: &DatabaseConnection) -> Result<entity::documento::Model, DbErr> {
    entity::documento::ActiveModel {
        tipo: ActiveValue::Set(format!("Documento {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}
