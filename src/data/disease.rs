use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct DiseaseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiseaseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        nombre: String,
        descripcion: String,
    ) -> Result<entity::enfermedad::Model, DbErr> {
        entity::enfermedad::ActiveModel {
            nombre: ActiveValue::Set(nombre),
            descripcion: ActiveValue::Set(descripcion),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn list(&self) -> Result<Vec<entity::enfermedad::Model>, DbErr> {
        entity::prelude::Enfermedad::find()
            .order_by_asc(entity::enfermedad::Column::Nombre)
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::enfermedad::Model>, DbErr> {
        entity::prelude::Enfermedad::find_by_id(id).one(self.db).await
    }

    /// Updates the provided fields, keeping the stored value for any field
    /// that was not supplied.
    pub async fn update(
        &self,
        id: i32,
        nombre: Option<String>,
        descripcion: Option<String>,
    ) -> Result<Option<entity::enfermedad::Model>, DbErr> {
        let Some(model) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::enfermedad::ActiveModel = model.into();
        if let Some(nombre) = nombre {
            active_model.nombre = ActiveValue::Set(nombre);
        }
        if let Some(descripcion) = descripcion {
            active_model.descripcion = ActiveValue::Set(descripcion);
        }

        Ok(Some(active_model.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Enfermedad::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
