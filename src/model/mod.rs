//! Wire DTOs and operation parameter types.
//!
//! Field names are the Spanish names of the public API; struct names follow
//! the codebase's English naming. Join results are flattened into plain
//! label fields rather than nested single-field objects.

pub mod api;
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
