//! SeaORM entity models for the AnimalBeats clinic database.
//!
//! One module per table. Column names mirror the database schema, which keeps
//! the Spanish naming used by the public API.

pub mod cita;
pub mod documento;
pub mod enfermedad;
pub mod especie;
pub mod mascota;
pub mod raza;
pub mod recordatorio;
pub mod rol;
pub mod servicio;
pub mod usuario;
pub mod veterinario;

pub mod prelude {
    pub use super::cita::Entity as Cita;
    pub use super::documento::Entity as Documento;
    pub use super::enfermedad::Entity as Enfermedad;
    pub use super::especie::Entity as Especie;
    pub use super::mascota::Entity as Mascota;
    pub use super::raza::Entity as Raza;
    pub use super::recordatorio::Entity as Recordatorio;
    pub use super::rol::Entity as Rol;
    pub use super::servicio::Entity as Servicio;
    pub use super::usuario::Entity as Usuario;
    pub use super::veterinario::Entity as Veterinario;
}
