use crate::data::appointment::{
    AppointmentRepository, CITA_CANCELADO, CITA_CONFIRMADO, CITA_PENDIENTE,
};
use crate::model::appointment::CreateAppointmentDto;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_cliente_with_mascota};

mod create;
mod list_by_mascota;
mod list_dashboard;
mod list_with_labels;
mod set_estado;
