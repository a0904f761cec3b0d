use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a breed row belonging to the given species.
pub async fn create_raza(
    db: &DatabaseConnection,
    id_especie: i32,
) -> Result<entity::raza::Model, DbErr> {
    entity::raza::ActiveModel {
        raza: ActiveValue::Set(format!("Raza {}", next_id())),
        descripcion: ActiveValue::Set(None),
        imagen: ActiveValue::Set(None),
        id_especie: ActiveValue::Set(id_especie),
        ..Default::default()
    }
    .insert(db)
    .await
}
