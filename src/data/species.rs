use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct SpeciesRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpeciesRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        especie: String,
        imagen: Option<String>,
    ) -> Result<entity::especie::Model, DbErr> {
        entity::especie::ActiveModel {
            especie: ActiveValue::Set(especie),
            imagen: ActiveValue::Set(imagen),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn list(&self) -> Result<Vec<entity::especie::Model>, DbErr> {
        entity::prelude::Especie::find()
            .order_by_asc(entity::especie::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::especie::Model>, DbErr> {
        entity::prelude::Especie::find_by_id(id).one(self.db).await
    }

    /// Updates the name and, when a new one was uploaded, the image URL.
    pub async fn update(
        &self,
        id: i32,
        especie: String,
        imagen: Option<String>,
    ) -> Result<Option<entity::especie::Model>, DbErr> {
        let Some(model) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::especie::ActiveModel = model.into();
        active_model.especie = ActiveValue::Set(especie);
        if let Some(imagen) = imagen {
            active_model.imagen = ActiveValue::Set(Some(imagen));
        }

        Ok(Some(active_model.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Especie::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
