//! Service layer for business logic and orchestration.
//!
//! Sits between the controller (HTTP) layer and the data (repository)
//! layer. Services own validation, cross-entity checks and the appointment
//! state machine; repositories stay thin and the controllers only translate
//! between DTOs and service calls.

pub mod appointment;
pub mod auth;
pub mod breed;
pub mod catalog;
pub mod dashboard;
pub mod disease;
pub mod pet;
pub mod reminder;
pub mod role;
pub mod species;
pub mod user;
pub mod veterinarian;
