use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Inserts a role row with an explicit id, skipping it when already present.
///
/// Role ids 1-3 are fixed application-wide, so tests frequently need the
/// same row more than once within a single database.
pub async fn ensure_rol(
    db: &DatabaseConnection,
    id: i32,
    label: &str,
) -> Result<entity::rol::Model, DbErr> {
    if let Some(existing) = entity::prelude::Rol::find_by_id(id).one(db).await? {
        return Ok(existing);
    }

    entity::rol::ActiveModel {
        id: ActiveValue::Set(id),
        rol: ActiveValue::Set(label.to_string()),
    }
    .insert(db)
    .await
}

/// Seeds the three fixed roles (1 admin, 2 cliente, 3 veterinario).
pub async fn seed_roles(db: &DatabaseConnection) -> Result<(), DbErr> {
    ensure_rol(db, 1, "admin").await?;
    ensure_rol(db, 2, "cliente").await?;
    ensure_rol(db, 3, "veterinario").await?;

    Ok(())
}
