use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a species row with a generated label and no image.
pub async fn create_especie(db: &DatabaseConnection) -> Result<entity::especie::Model, DbErr> {
    entity::especie::ActiveModel {
        especie: ActiveValue::Set(format!("Especie {}", next_id())),
        imagen: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
