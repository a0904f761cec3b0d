use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pet row joined with its species, breed and owner labels.
pub struct PetWithLabels {
    pub mascota: entity::mascota::Model,
    pub especie: Option<String>,
    pub raza: Option<String>,
    pub cliente: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct PetListItemDto {
    pub id: i32,
    pub nombre: String,
    pub fecha_nacimiento: NaiveDate,
    pub estado: String,
    pub id_cliente: String,
    pub especie: Option<String>,
    pub raza: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct PetDetailDto {
    pub id: i32,
    pub nombre: String,
    pub fecha_nacimiento: NaiveDate,
    pub estado: String,
    pub cliente: Option<String>,
    pub especie: Option<String>,
    pub raza: Option<String>,
}

impl PetWithLabels {
    pub fn into_list_item(self) -> PetListItemDto {
        PetListItemDto {
            id: self.mascota.id,
            nombre: self.mascota.nombre,
            fecha_nacimiento: self.mascota.fecha_nacimiento,
            estado: self.mascota.estado,
            id_cliente: self.mascota.id_cliente,
            especie: self.especie,
            raza: self.raza,
        }
    }

    pub fn into_detail(self) -> PetDetailDto {
        PetDetailDto {
            id: self.mascota.id,
            nombre: self.mascota.nombre,
            fecha_nacimiento: self.mascota.fecha_nacimiento,
            estado: self.mascota.estado,
            cliente: self.cliente,
            especie: self.especie,
            raza: self.raza,
        }
    }
}

/// Minimal pet reference, as returned by `GET /Mascota/recordatorio/{id}`.
#[derive(Serialize, ToSchema)]
pub struct PetRefDto {
    pub id: i32,
    pub nombre: String,
}

/// Body of `POST /Mascotas/Registro`.
#[derive(Deserialize, ToSchema)]
pub struct CreatePetDto {
    pub nombre: String,
    pub fecha_nacimiento: NaiveDate,
    pub estado: String,
    pub id_cliente: String,
    pub id_especie: i32,
    pub id_raza: i32,
}

/// Body of `PUT /Mascotas/Actualizar/{id}`.
#[derive(Deserialize, ToSchema)]
pub struct UpdatePetDto {
    pub nombre: String,
    pub estado: String,
}
