use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active reminder for the given client and pet.
pub async fn create_recordatorio(
    db: &DatabaseConnection,
    id_cliente: &str,
    id_mascota: i32,
) -> Result<entity::recordatorio::Model, DbErr> {
    entity::recordatorio::ActiveModel {
        id_cliente: ActiveValue::Set(id_cliente.to_string()),
        id_mascota: ActiveValue::Set(id_mascota),
        fecha: ActiveValue::Set(Utc::now() + Duration::days(1)),
        descripcion: ActiveValue::Set("Vacuna anual".to_string()),
        estado: ActiveValue::Set("Activo".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
