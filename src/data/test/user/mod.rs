use crate::data::user::{UserRepository, ESTADO_ACTIVO, ESTADO_SUSPENDIDO};
use crate::model::user::CreateUserParams;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_correo;
mod list_active;
mod set_estado;
mod update;
