use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, rol: String) -> Result<entity::rol::Model, DbErr> {
        entity::rol::ActiveModel {
            rol: ActiveValue::Set(rol),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn list(&self) -> Result<Vec<entity::rol::Model>, DbErr> {
        entity::prelude::Rol::find()
            .order_by_asc(entity::rol::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a role and reports how many rows went away.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Rol::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected)
    }
}
