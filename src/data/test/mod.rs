mod appointment;
mod pet;
mod reminder;
mod species;
mod user;
mod veterinarian;
