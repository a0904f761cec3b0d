use crate::data::pet::PetRepository;
use crate::model::pet::CreatePetDto;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list_active;
mod suspend;
mod update;
