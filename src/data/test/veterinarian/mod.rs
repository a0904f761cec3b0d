use crate::data::veterinarian::VeterinarianRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod deactivate;
mod list_active;
