use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::veterinarian::CreateVeterinarianParams;

pub struct VeterinarianRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VeterinarianRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateVeterinarianParams,
    ) -> Result<entity::veterinario::Model, DbErr> {
        entity::veterinario::ActiveModel {
            nombre_completo: ActiveValue::Set(params.nombre_completo),
            estudios_especialidad: ActiveValue::Set(params.estudios_especialidad),
            edad: ActiveValue::Set(params.edad),
            altura: ActiveValue::Set(params.altura),
            anios_experiencia: ActiveValue::Set(params.anios_experiencia),
            imagen_url: ActiveValue::Set(params.imagen_url),
            activo: ActiveValue::Set(true),
            creado_en: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::veterinario::Model>, DbErr> {
        entity::prelude::Veterinario::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Lists active profiles, newest first.
    pub async fn list_active(&self) -> Result<Vec<entity::veterinario::Model>, DbErr> {
        entity::prelude::Veterinario::find()
            .filter(entity::veterinario::Column::Activo.eq(true))
            .order_by_desc(entity::veterinario::Column::CreadoEn)
            .all(self.db)
            .await
    }

    /// Deactivates a profile. The row is kept.
    pub async fn deactivate(&self, id: i32) -> Result<Option<entity::veterinario::Model>, DbErr> {
        let Some(model) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::veterinario::ActiveModel = model.into();
        active_model.activo = ActiveValue::Set(false);

        Ok(Some(active_model.update(self.db).await?))
    }
}
