pub mod appointment;
pub mod breed;
pub mod catalog;
pub mod disease;
pub mod pet;
pub mod reminder;
pub mod role;
pub mod species;
pub mod user;
pub mod veterinarian;

#[cfg(test)]
mod test;
