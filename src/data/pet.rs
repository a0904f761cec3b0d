use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::data::user::ESTADO_SUSPENDIDO;
use crate::model::pet::{CreatePetDto, PetWithLabels};

pub struct PetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePetDto) -> Result<entity::mascota::Model, DbErr> {
        entity::mascota::ActiveModel {
            nombre: ActiveValue::Set(params.nombre),
            fecha_nacimiento: ActiveValue::Set(params.fecha_nacimiento),
            estado: ActiveValue::Set(params.estado),
            id_cliente: ActiveValue::Set(params.id_cliente),
            id_especie: ActiveValue::Set(params.id_especie),
            id_raza: ActiveValue::Set(params.id_raza),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::mascota::Model>, DbErr> {
        entity::prelude::Mascota::find_by_id(id).one(self.db).await
    }

    /// Gets a pet by id with its species, breed and owner labels.
    pub async fn get_with_labels(&self, id: i32) -> Result<Option<PetWithLabels>, DbErr> {
        let Some(mascota) = self.get(id).await? else {
            return Ok(None);
        };

        let mut enriched = self.with_labels(vec![mascota]).await?;
        Ok(enriched.pop())
    }

    /// Lists every pet regardless of status, with labels. The veterinarian
    /// dashboard shows suspended pets too.
    pub async fn list_all(&self) -> Result<Vec<PetWithLabels>, DbErr> {
        let mascotas = entity::prelude::Mascota::find()
            .order_by_asc(entity::mascota::Column::Id)
            .all(self.db)
            .await?;

        self.with_labels(mascotas).await
    }

    /// Lists every non-suspended pet with labels.
    pub async fn list_active(&self) -> Result<Vec<PetWithLabels>, DbErr> {
        let mascotas = entity::prelude::Mascota::find()
            .filter(entity::mascota::Column::Estado.ne(ESTADO_SUSPENDIDO))
            .order_by_asc(entity::mascota::Column::Id)
            .all(self.db)
            .await?;

        self.with_labels(mascotas).await
    }

    /// Lists the non-suspended pets of one client with labels.
    pub async fn list_active_by_cliente(
        &self,
        id_cliente: &str,
    ) -> Result<Vec<PetWithLabels>, DbErr> {
        let mascotas = entity::prelude::Mascota::find()
            .filter(entity::mascota::Column::IdCliente.eq(id_cliente))
            .filter(entity::mascota::Column::Estado.ne(ESTADO_SUSPENDIDO))
            .order_by_asc(entity::mascota::Column::Id)
            .all(self.db)
            .await?;

        self.with_labels(mascotas).await
    }

    pub async fn update(
        &self,
        id: i32,
        nombre: String,
        estado: String,
    ) -> Result<Option<entity::mascota::Model>, DbErr> {
        let Some(mascota) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::mascota::ActiveModel = mascota.into();
        active_model.nombre = ActiveValue::Set(nombre);
        active_model.estado = ActiveValue::Set(estado);

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Flips a pet to "Suspendido". The row is kept.
    pub async fn suspend(&self, id: i32) -> Result<Option<entity::mascota::Model>, DbErr> {
        let Some(mascota) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::mascota::ActiveModel = mascota.into();
        active_model.estado = ActiveValue::Set(ESTADO_SUSPENDIDO.to_string());

        Ok(Some(active_model.update(self.db).await?))
    }

    /// First pet registered for a client, by id.
    pub async fn first_by_cliente(
        &self,
        id_cliente: &str,
    ) -> Result<Option<entity::mascota::Model>, DbErr> {
        entity::prelude::Mascota::find()
            .filter(entity::mascota::Column::IdCliente.eq(id_cliente))
            .order_by_asc(entity::mascota::Column::Id)
            .one(self.db)
            .await
    }

    /// Resolves species, breed and owner names for a batch of pets with one
    /// query per related table.
    async fn with_labels(
        &self,
        mascotas: Vec<entity::mascota::Model>,
    ) -> Result<Vec<PetWithLabels>, DbErr> {
        if mascotas.is_empty() {
            return Ok(Vec::new());
        }

        let especie_ids: Vec<i32> = mascotas.iter().map(|m| m.id_especie).collect();
        let raza_ids: Vec<i32> = mascotas.iter().map(|m| m.id_raza).collect();
        let cliente_ids: Vec<String> = mascotas.iter().map(|m| m.id_cliente.clone()).collect();

        let especies: HashMap<i32, String> = entity::prelude::Especie::find()
            .filter(entity::especie::Column::Id.is_in(especie_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|e| (e.id, e.especie))
            .collect();

        let razas: HashMap<i32, String> = entity::prelude::Raza::find()
            .filter(entity::raza::Column::Id.is_in(raza_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| (r.id, r.raza))
            .collect();

        let clientes: HashMap<String, String> = entity::prelude::Usuario::find()
            .filter(entity::usuario::Column::NDocumento.is_in(cliente_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.n_documento, u.nombre))
            .collect();

        Ok(mascotas
            .into_iter()
            .map(|mascota| {
                let especie = especies.get(&mascota.id_especie).cloned();
                let raza = razas.get(&mascota.id_raza).cloned();
                let cliente = clientes.get(&mascota.id_cliente).cloned();
                PetWithLabels {
                    mascota,
                    especie,
                    raza,
                    cliente,
                }
            })
            .collect())
    }
}
