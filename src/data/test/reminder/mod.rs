use crate::data::reminder::ReminderRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_cliente_with_mascota};

mod create;
mod delete;
mod list_with_pet;
