use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /registro`.
///
/// Every field is optional at the serde level so that an absent field
/// produces the API's own "Faltan campos" validation error instead of a
/// deserialization rejection.
#[derive(Deserialize, ToSchema)]
pub struct RegisterDto {
    pub n_documento: Option<String>,
    pub correoelectronico: Option<String>,
    pub contrasena: Option<String>,
    pub id_documento: Option<i32>,
    pub nombre: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResponseDto {
    pub mensaje: String,
    /// Role label derived from the registration email.
    pub rol: String,
}

/// Body of `POST /login`.
#[derive(Deserialize, ToSchema)]
pub struct LoginDto {
    pub correoelectronico: String,
    pub contrasena: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserDto {
    pub n_documento: String,
    pub nombre: String,
    pub correoelectronico: String,
    /// Numeric role id.
    pub rol: i32,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponseDto {
    pub mensaje: String,
    pub usuario: LoginUserDto,
    /// Role label ("admin", "cliente", "veterinario").
    pub rol: String,
    /// Signed session token, valid for one hour.
    pub token: String,
}
