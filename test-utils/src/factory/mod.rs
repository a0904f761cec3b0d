//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `create_*` convenience
//! function and, where tests need variation, a builder-style `Factory`
//! struct. Factories insert every row a foreign key requires, so a single
//! call yields a valid object graph.

pub mod cita;
pub mod documento;
pub mod enfermedad;
pub mod especie;
pub mod helpers;
pub mod mascota;
pub mod raza;
pub mod recordatorio;
pub mod rol;
pub mod servicio;
pub mod usuario;
pub mod veterinario;

// Re-export commonly used factory functions for concise usage
pub use cita::create_cita;
pub use documento::create_documento;
pub use enfermedad::create_enfermedad;
pub use especie::create_especie;
pub use mascota::create_mascota;
pub use raza::create_raza;
pub use recordatorio::create_recordatorio;
pub use servicio::create_servicio;
pub use usuario::{create_admin, create_cliente};
pub use veterinario::create_veterinario;
