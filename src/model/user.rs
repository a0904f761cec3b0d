use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User row as listed by `GET /usuario/Listado`.
#[derive(Serialize, ToSchema)]
pub struct UserListItemDto {
    pub n_documento: String,
    pub nombre: String,
    pub correoelectronico: String,
    pub estado: String,
    pub id_rol: i32,
    /// Document type label.
    pub documento: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct UserListDto {
    #[serde(rename = "Usuarios")]
    pub usuarios: Vec<UserListItemDto>,
}

/// User as returned by `GET /usuario/{n_documento}`.
#[derive(Serialize, ToSchema)]
pub struct UserDetailDto {
    pub n_documento: String,
    pub nombre: String,
    pub correoelectronico: String,
    pub documento: Option<String>,
}

/// Body of `POST /usuario/Crear` (admin-created account).
#[derive(Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub n_documento: String,
    pub nombre: String,
    pub correoelectronico: String,
    pub contrasena: String,
    pub id_documento: i32,
    pub id_rol: i32,
}

/// Body of `PUT /usuario/Actualizar/{n_documento}`.
#[derive(Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub nombre: String,
    pub correoelectronico: String,
    pub id_documento: i32,
    pub id_rol: i32,
}

/// Parameters for inserting a user row; the password is already hashed.
pub struct CreateUserParams {
    pub n_documento: String,
    pub nombre: String,
    pub correoelectronico: String,
    pub contrasena_hash: String,
    pub id_documento: i32,
    pub id_rol: i32,
}

/// A user row joined with its document type label.
pub struct UserWithDocumento {
    pub usuario: entity::usuario::Model,
    pub documento: Option<String>,
}

impl UserWithDocumento {
    pub fn into_list_item(self) -> UserListItemDto {
        UserListItemDto {
            n_documento: self.usuario.n_documento,
            nombre: self.usuario.nombre,
            correoelectronico: self.usuario.correoelectronico,
            estado: self.usuario.estado,
            id_rol: self.usuario.id_rol,
            documento: self.documento,
        }
    }

    pub fn into_detail(self) -> UserDetailDto {
        UserDetailDto {
            n_documento: self.usuario.n_documento,
            nombre: self.usuario.nombre,
            correoelectronico: self.usuario.correoelectronico,
            documento: self.documento,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_serializes_under_the_capitalized_usuarios_key() {
        let value = serde_json::to_value(UserListDto { usuarios: vec![] }).unwrap();

        assert!(value.get("Usuarios").is_some());
        assert!(value.get("usuarios").is_none());
    }
}
