use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates an active veterinarian profile with default values.
pub async fn create_veterinario(
    db: &DatabaseConnection,
) -> Result<entity::veterinario::Model, DbErr> {
    let id = next_id();
    entity::veterinario::ActiveModel {
        nombre_completo: ActiveValue::Set(format!("Veterinario {}", id)),
        estudios_especialidad: ActiveValue::Set("Medicina general".to_string()),
        edad: ActiveValue::Set(35),
        altura: ActiveValue::Set(1.75),
        anios_experiencia: ActiveValue::Set(8),
        imagen_url: ActiveValue::Set(None),
        activo: ActiveValue::Set(true),
        creado_en: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
