use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::model::appointment::{
    AppointmentWithLabels, CreateAppointmentDto, DashboardAppointment,
};

pub const CITA_PENDIENTE: &str = "Pendiente";
pub const CITA_CONFIRMADO: &str = "Confirmado";
pub const CITA_CANCELADO: &str = "Cancelado";

pub struct AppointmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new appointment in the pending state.
    pub async fn create(
        &self,
        params: CreateAppointmentDto,
    ) -> Result<entity::cita::Model, DbErr> {
        entity::cita::ActiveModel {
            id_mascota: ActiveValue::Set(params.id_mascota),
            id_cliente: ActiveValue::Set(params.id_cliente),
            id_servicio: ActiveValue::Set(params.id_servicio),
            id_veterinario: ActiveValue::Set(params.id_veterinario),
            fecha: ActiveValue::Set(params.fecha),
            descripcion: ActiveValue::Set(params.descripcion.unwrap_or_default()),
            estado: ActiveValue::Set(CITA_PENDIENTE.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::cita::Model>, DbErr> {
        entity::prelude::Cita::find_by_id(id).one(self.db).await
    }

    /// Gets an appointment by id with every display label resolved.
    pub async fn get_with_labels(&self, id: i32) -> Result<Option<AppointmentWithLabels>, DbErr> {
        let Some(cita) = self.get(id).await? else {
            return Ok(None);
        };

        let mut enriched = self.with_labels(vec![cita]).await?;
        Ok(enriched.pop())
    }

    /// Lists every appointment with pet, client, service and vet labels,
    /// newest first.
    pub async fn list_with_labels(&self) -> Result<Vec<AppointmentWithLabels>, DbErr> {
        let citas = entity::prelude::Cita::find()
            .order_by_desc(entity::cita::Column::Fecha)
            .all(self.db)
            .await?;

        self.with_labels(citas).await
    }

    pub async fn set_estado(
        &self,
        cita: entity::cita::Model,
        estado: &str,
    ) -> Result<entity::cita::Model, DbErr> {
        let mut active_model: entity::cita::ActiveModel = cita.into();
        active_model.estado = ActiveValue::Set(estado.to_string());
        active_model.update(self.db).await
    }

    /// Writes the description and status of an appointment.
    pub async fn update(
        &self,
        cita: entity::cita::Model,
        descripcion: Option<String>,
        estado: &str,
    ) -> Result<entity::cita::Model, DbErr> {
        let mut active_model: entity::cita::ActiveModel = cita.into();
        if let Some(descripcion) = descripcion {
            active_model.descripcion = ActiveValue::Set(descripcion);
        }
        active_model.estado = ActiveValue::Set(estado.to_string());
        active_model.update(self.db).await
    }

    /// Lists the appointments of one pet with the service label.
    pub async fn list_by_mascota(
        &self,
        id_mascota: i32,
    ) -> Result<Vec<(entity::cita::Model, Option<entity::servicio::Model>)>, DbErr> {
        entity::prelude::Cita::find()
            .find_also_related(entity::prelude::Servicio)
            .filter(entity::cita::Column::IdMascota.eq(id_mascota))
            .order_by_asc(entity::cita::Column::Fecha)
            .all(self.db)
            .await
    }

    /// Lists every appointment regardless of status, soonest first, with the
    /// pet and service labels the dashboards show.
    pub async fn list_dashboard(&self) -> Result<Vec<DashboardAppointment>, DbErr> {
        let citas = entity::prelude::Cita::find()
            .order_by_asc(entity::cita::Column::Fecha)
            .all(self.db)
            .await?;

        self.into_dashboard(citas).await
    }

    /// Lists one client's future-dated appointments for their dashboard.
    pub async fn list_futuras_by_cliente(
        &self,
        id_cliente: &str,
    ) -> Result<Vec<DashboardAppointment>, DbErr> {
        let citas = entity::prelude::Cita::find()
            .filter(entity::cita::Column::IdCliente.eq(id_cliente))
            .filter(entity::cita::Column::Fecha.gt(Utc::now()))
            .order_by_asc(entity::cita::Column::Fecha)
            .all(self.db)
            .await?;

        self.into_dashboard(citas).await
    }

    async fn into_dashboard(
        &self,
        citas: Vec<entity::cita::Model>,
    ) -> Result<Vec<DashboardAppointment>, DbErr> {
        let enriched = self.with_labels(citas).await?;
        Ok(enriched
            .into_iter()
            .map(|a| DashboardAppointment {
                cita: a.cita,
                mascota: a.mascota,
                servicio: a.servicio,
            })
            .collect())
    }

    /// Resolves display labels for a batch of appointments with one query per
    /// related table.
    async fn with_labels(
        &self,
        citas: Vec<entity::cita::Model>,
    ) -> Result<Vec<AppointmentWithLabels>, DbErr> {
        if citas.is_empty() {
            return Ok(Vec::new());
        }

        let mascota_ids: Vec<i32> = citas.iter().map(|c| c.id_mascota).collect();
        let cliente_ids: Vec<String> = citas.iter().map(|c| c.id_cliente.clone()).collect();
        let servicio_ids: Vec<i32> = citas.iter().map(|c| c.id_servicio).collect();
        let veterinario_ids: Vec<i32> = citas.iter().map(|c| c.id_veterinario).collect();

        let mascotas: HashMap<i32, String> = entity::prelude::Mascota::find()
            .filter(entity::mascota::Column::Id.is_in(mascota_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| (m.id, m.nombre))
            .collect();

        let clientes: HashMap<String, String> = entity::prelude::Usuario::find()
            .filter(entity::usuario::Column::NDocumento.is_in(cliente_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.n_documento, u.nombre))
            .collect();

        let servicios: HashMap<i32, String> = entity::prelude::Servicio::find()
            .filter(entity::servicio::Column::Id.is_in(servicio_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s.servicio))
            .collect();

        let veterinarios: HashMap<i32, String> = entity::prelude::Veterinario::find()
            .filter(entity::veterinario::Column::Id.is_in(veterinario_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|v| (v.id, v.nombre_completo))
            .collect();

        Ok(citas
            .into_iter()
            .map(|cita| {
                let mascota = mascotas.get(&cita.id_mascota).cloned();
                let cliente = clientes.get(&cita.id_cliente).cloned();
                let servicio = servicios.get(&cita.id_servicio).cloned();
                let veterinario = veterinarios.get(&cita.id_veterinario).cloned();
                AppointmentWithLabels {
                    cita,
                    mascota,
                    cliente,
                    servicio,
                    veterinario,
                }
            })
            .collect())
    }
}
