use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a service catalog row with a generated label.
pub async fn create_servicio(db: &DatabaseConnection) -> Result<entity::servicio::Model, DbErr> {
    entity::servicio::ActiveModel {
        servicio: ActiveValue::Set(format!("Servicio {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}
