use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::model::reminder::ReminderWithPet;

pub struct ReminderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReminderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        id_cliente: String,
        id_mascota: i32,
        fecha: DateTime<Utc>,
        descripcion: String,
    ) -> Result<entity::recordatorio::Model, DbErr> {
        entity::recordatorio::ActiveModel {
            id_cliente: ActiveValue::Set(id_cliente),
            id_mascota: ActiveValue::Set(id_mascota),
            fecha: ActiveValue::Set(fecha),
            descripcion: ActiveValue::Set(descripcion),
            estado: ActiveValue::Set("Activo".to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists every reminder with the pet name, soonest first.
    pub async fn list_with_pet(&self) -> Result<Vec<ReminderWithPet>, DbErr> {
        let recordatorios = entity::prelude::Recordatorio::find()
            .order_by_asc(entity::recordatorio::Column::Fecha)
            .all(self.db)
            .await?;

        if recordatorios.is_empty() {
            return Ok(Vec::new());
        }

        let mascota_ids: Vec<i32> = recordatorios.iter().map(|r| r.id_mascota).collect();
        let mascotas: HashMap<i32, String> = entity::prelude::Mascota::find()
            .filter(entity::mascota::Column::Id.is_in(mascota_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| (m.id, m.nombre))
            .collect();

        Ok(recordatorios
            .into_iter()
            .map(|recordatorio| {
                let mascota = mascotas.get(&recordatorio.id_mascota).cloned();
                ReminderWithPet {
                    recordatorio,
                    mascota,
                }
            })
            .collect())
    }

    pub async fn list_by_mascota(
        &self,
        id_mascota: i32,
    ) -> Result<Vec<entity::recordatorio::Model>, DbErr> {
        entity::prelude::Recordatorio::find()
            .filter(entity::recordatorio::Column::IdMascota.eq(id_mascota))
            .order_by_asc(entity::recordatorio::Column::Fecha)
            .all(self.db)
            .await
    }

    /// Replaces every editable field of a reminder.
    pub async fn update(
        &self,
        id: i32,
        id_cliente: String,
        id_mascota: i32,
        fecha: DateTime<Utc>,
        descripcion: String,
    ) -> Result<Option<entity::recordatorio::Model>, DbErr> {
        let Some(model) = entity::prelude::Recordatorio::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::recordatorio::ActiveModel = model.into();
        active_model.id_cliente = ActiveValue::Set(id_cliente);
        active_model.id_mascota = ActiveValue::Set(id_mascota);
        active_model.fecha = ActiveValue::Set(fecha);
        active_model.descripcion = ActiveValue::Set(descripcion);

        Ok(Some(active_model.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Recordatorio::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
