use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a disease row with generated name and description.
pub async fn create_enfermedad(db: &DatabaseConnection) -> Result<entity::enfermedad::Model, DbErr> {
    let id = next_id();
    entity::enfermedad::ActiveModel {
        nombre: ActiveValue::Set(format!("Enfermedad {}", id)),
        descripcion: ActiveValue::Set(format!("Descripcion {}", id)),
        ..Default::default()
    }
    .insert(db)
    .await
}
