use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct BreedRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BreedRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        raza: String,
        descripcion: Option<String>,
        imagen: Option<String>,
        id_especie: i32,
    ) -> Result<entity::raza::Model, DbErr> {
        entity::raza::ActiveModel {
            raza: ActiveValue::Set(raza),
            descripcion: ActiveValue::Set(descripcion),
            imagen: ActiveValue::Set(imagen),
            id_especie: ActiveValue::Set(id_especie),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn list_by_especie(&self, id_especie: i32) -> Result<Vec<entity::raza::Model>, DbErr> {
        entity::prelude::Raza::find()
            .filter(entity::raza::Column::IdEspecie.eq(id_especie))
            .order_by_asc(entity::raza::Column::Raza)
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::raza::Model>, DbErr> {
        entity::prelude::Raza::find_by_id(id).one(self.db).await
    }

    /// Updates name, description and species; the image only when a new one
    /// was uploaded.
    pub async fn update(
        &self,
        id: i32,
        raza: String,
        descripcion: Option<String>,
        imagen: Option<String>,
        id_especie: i32,
    ) -> Result<Option<entity::raza::Model>, DbErr> {
        let Some(model) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::raza::ActiveModel = model.into();
        active_model.raza = ActiveValue::Set(raza);
        active_model.descripcion = ActiveValue::Set(descripcion);
        active_model.id_especie = ActiveValue::Set(id_especie);
        if let Some(imagen) = imagen {
            active_model.imagen = ActiveValue::Set(Some(imagen));
        }

        Ok(Some(active_model.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Raza::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected)
    }
}
