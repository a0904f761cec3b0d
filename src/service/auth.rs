//! Registration, login and session token handling.
//!
//! Roles are fixed application-wide: 1 admin, 2 cliente, 3 veterinario.
//! Accounts registering with one of the two reserved clinic addresses get
//! the matching staff role; everyone else is a client.

use bcrypt::{hash, verify};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::data::user::UserRepository;
use crate::error::{auth::AuthError, AppError};
use crate::model::auth::{
    LoginDto, LoginResponseDto, LoginUserDto, RegisterDto, RegisterResponseDto,
};
use crate::model::user::CreateUserParams;

pub const ROL_ADMIN: i32 = 1;
pub const ROL_CLIENTE: i32 = 2;
pub const ROL_VETERINARIO: i32 = 3;

pub const ADMIN_EMAIL: &str = "administrador@animalbeats.com";
pub const VETERINARIO_EMAIL: &str = "veterinario@animalbeats.com";

const BCRYPT_COST: u32 = 10;
const TOKEN_TTL_HOURS: i64 = 1;
const MIN_PASSWORD_LEN: usize = 8;

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub n_documento: String,
    pub nombre: String,
    pub rol: i32,
    pub exp: usize,
}

/// Role id derived from the registration email (case-insensitive).
pub fn rol_for_email(correoelectronico: &str) -> i32 {
    let correo = correoelectronico.to_lowercase();
    if correo == ADMIN_EMAIL {
        ROL_ADMIN
    } else if correo == VETERINARIO_EMAIL {
        ROL_VETERINARIO
    } else {
        ROL_CLIENTE
    }
}

pub fn rol_label(rol: i32) -> &'static str {
    match rol {
        ROL_ADMIN => "admin",
        ROL_VETERINARIO => "veterinario",
        _ => "cliente",
    }
}

/// Signs a session token valid for one hour.
pub fn issue_token(
    secret: &str,
    n_documento: &str,
    nombre: &str,
    rol: i32,
) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize;
    let claims = Claims {
        n_documento: n_documento.to_string(),
        nombre: nombre.to_string(),
        rol,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt_secret: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt_secret: &'a str) -> Self {
        Self { db, jwt_secret }
    }

    /// Registers a new account with a bcrypt-hashed password.
    ///
    /// The role is derived from the email, never taken from the caller.
    pub async fn register(&self, dto: RegisterDto) -> Result<RegisterResponseDto, AppError> {
        let n_documento = required(dto.n_documento)?;
        let correoelectronico = required(dto.correoelectronico)?;
        let contrasena = required(dto.contrasena)?;
        let nombre = required(dto.nombre)?;
        let id_documento = dto
            .id_documento
            .ok_or_else(|| AppError::BadRequest("Faltan campos".to_string()))?;

        if contrasena.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::BadRequest(
                "La contrasena debe tener al menos 8 caracteres".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);

        if repo.get_by_correo(&correoelectronico).await?.is_some() {
            return Err(AppError::BadRequest(
                "El correo ya esta registrado".to_string(),
            ));
        }

        let id_rol = rol_for_email(&correoelectronico);
        let contrasena_hash = hash(&contrasena, BCRYPT_COST).map_err(AuthError::from)?;

        repo.create(CreateUserParams {
            n_documento,
            nombre,
            correoelectronico,
            contrasena_hash,
            id_documento,
            id_rol,
        })
        .await?;

        Ok(RegisterResponseDto {
            mensaje: "Usuario registrado correctamente".to_string(),
            rol: rol_label(id_rol).to_string(),
        })
    }

    /// Verifies credentials and issues a session token.
    pub async fn login(&self, dto: LoginDto) -> Result<LoginResponseDto, AppError> {
        let repo = UserRepository::new(self.db);

        let usuario = repo
            .get_by_correo(&dto.correoelectronico)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let valid = verify(&dto.contrasena, &usuario.contrasena).map_err(AuthError::from)?;
        if !valid {
            return Err(AuthError::WrongPassword.into());
        }

        let token = issue_token(
            self.jwt_secret,
            &usuario.n_documento,
            &usuario.nombre,
            usuario.id_rol,
        )
        .map_err(AuthError::from)?;

        Ok(LoginResponseDto {
            mensaje: "Inicio de sesion exitoso".to_string(),
            rol: rol_label(usuario.id_rol).to_string(),
            usuario: LoginUserDto {
                n_documento: usuario.n_documento,
                nombre: usuario.nombre,
                correoelectronico: usuario.correoelectronico,
                rol: usuario.id_rol,
            },
            token,
        })
    }
}

fn required(field: Option<String>) -> Result<String, AppError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(AppError::BadRequest("Faltan campos".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    const SECRET: &str = "secret-for-tests";

    #[test]
    fn derives_roles_from_reserved_emails() {
        assert_eq!(rol_for_email("administrador@animalbeats.com"), ROL_ADMIN);
        assert_eq!(
            rol_for_email("veterinario@animalbeats.com"),
            ROL_VETERINARIO
        );
        assert_eq!(rol_for_email("Administrador@AnimalBeats.com"), ROL_ADMIN);
        assert_eq!(rol_for_email("cliente@example.com"), ROL_CLIENTE);
    }

    fn register_dto(correo: &str, contrasena: &str, id_documento: Option<i32>) -> RegisterDto {
        RegisterDto {
            n_documento: Some("1001".to_string()),
            correoelectronico: Some(correo.to_string()),
            contrasena: Some(contrasena.to_string()),
            id_documento,
            nombre: Some("Ana Torres".to_string()),
        }
    }

    #[tokio::test]
    async fn register_rejects_short_password() {
        let mut test = TestBuilder::new()
            .with_clinic_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        let result = AuthService::new(db, SECRET)
            .register(register_dto("ana@example.com", "corta", Some(1)))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn register_rejects_missing_fields() {
        let mut test = TestBuilder::new()
            .with_clinic_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        let result = AuthService::new(db, SECRET)
            .register(register_dto("ana@example.com", "password123", None))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn register_assigns_admin_role_to_reserved_email() {
        let mut test = TestBuilder::new()
            .with_clinic_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        factory::rol::seed_roles(db).await.unwrap();
        let documento = factory::create_documento(db).await.unwrap();

        let response = AuthService::new(db, SECRET)
            .register(register_dto(
                "administrador@animalbeats.com",
                "password123",
                Some(documento.id),
            ))
            .await
            .unwrap();

        assert_eq!(response.rol, "admin");

        let stored = UserRepository::new(db)
            .get_by_documento("1001")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.id_rol, ROL_ADMIN);
        assert_ne!(stored.contrasena, "password123");
    }

    #[tokio::test]
    async fn login_rejects_wrong_password_without_token() {
        let mut test = TestBuilder::new()
            .with_clinic_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        let stored_hash = hash("password123", 4).unwrap();
        let cliente = test_utils::factory::usuario::UsuarioFactory::new(db)
            .contrasena(stored_hash)
            .build()
            .await
            .unwrap();

        let result = AuthService::new(db, SECRET)
            .login(LoginDto {
                correoelectronico: cliente.correoelectronico,
                contrasena: "equivocada".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::WrongPassword))
        ));
    }

    #[tokio::test]
    async fn login_returns_token_for_valid_credentials() {
        let mut test = TestBuilder::new()
            .with_clinic_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        let stored_hash = hash("password123", 4).unwrap();
        let cliente = test_utils::factory::usuario::UsuarioFactory::new(db)
            .contrasena(stored_hash)
            .build()
            .await
            .unwrap();

        let response = AuthService::new(db, SECRET)
            .login(LoginDto {
                correoelectronico: cliente.correoelectronico.clone(),
                contrasena: "password123".to_string(),
            })
            .await
            .unwrap();

        assert!(!response.token.is_empty());
        assert_eq!(response.rol, "cliente");
        assert_eq!(response.usuario.correoelectronico, cliente.correoelectronico);
    }

    #[tokio::test]
    async fn login_404s_unknown_email() {
        let mut test = TestBuilder::new()
            .with_clinic_tables()
            .build()
            .await
            .unwrap();
        let db = test.database().await.unwrap();

        let result = AuthService::new(db, SECRET)
            .login(LoginDto {
                correoelectronico: "nadie@example.com".to_string(),
                contrasena: "password123".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::UserNotFound))
        ));
    }
}
