use bcrypt::hash;
use sea_orm::DatabaseConnection;

use crate::data::user::{UserRepository, ESTADO_ACTIVO, ESTADO_SUSPENDIDO};
use crate::error::{auth::AuthError, AppError};
use crate::model::user::{
    CreateUserDto, CreateUserParams, UpdateUserDto, UserDetailDto, UserListDto, UserListItemDto,
};
use crate::service::auth::{rol_for_email, ROL_ADMIN};

const ESTADO_PENDIENTE: &str = "Pendiente";
const BCRYPT_COST: u32 = 10;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<UserListDto, AppError> {
        let repo = UserRepository::new(self.db);
        let usuarios = repo.list_active().await?;

        Ok(UserListDto {
            usuarios: usuarios
                .into_iter()
                .map(|u| u.into_list_item())
                .collect::<Vec<UserListItemDto>>(),
        })
    }

    pub async fn get(&self, n_documento: &str) -> Result<UserDetailDto, AppError> {
        let repo = UserRepository::new(self.db);

        repo.get_with_documento(n_documento)
            .await?
            .map(|u| u.into_detail())
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))
    }

    /// Creates an account with an explicit role, for the admin panel.
    ///
    /// The admin role is only accepted for the reserved clinic address.
    pub async fn create(&self, dto: CreateUserDto) -> Result<(), AppError> {
        if dto.id_rol == ROL_ADMIN && rol_for_email(&dto.correoelectronico) != ROL_ADMIN {
            return Err(AppError::BadRequest(
                "El rol administrador esta reservado".to_string(),
            ));
        }

        let contrasena_hash = hash(&dto.contrasena, BCRYPT_COST).map_err(AuthError::from)?;

        let repo = UserRepository::new(self.db);
        repo.create(CreateUserParams {
            n_documento: dto.n_documento,
            nombre: dto.nombre,
            correoelectronico: dto.correoelectronico,
            contrasena_hash,
            id_documento: dto.id_documento,
            id_rol: dto.id_rol,
        })
        .await?;

        Ok(())
    }

    pub async fn update(&self, n_documento: &str, dto: UpdateUserDto) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        repo.update(
            n_documento,
            dto.nombre,
            dto.correoelectronico,
            dto.id_documento,
            dto.id_rol,
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(())
    }

    pub async fn suspend(&self, n_documento: &str) -> Result<(), AppError> {
        self.set_estado(n_documento, ESTADO_SUSPENDIDO).await
    }

    pub async fn reactivate(&self, n_documento: &str) -> Result<(), AppError> {
        self.set_estado(n_documento, ESTADO_ACTIVO).await
    }

    pub async fn mark_pending(&self, n_documento: &str) -> Result<(), AppError> {
        self.set_estado(n_documento, ESTADO_PENDIENTE).await
    }

    async fn set_estado(&self, n_documento: &str, estado: &str) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        repo.set_estado(n_documento, estado)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(())
    }
}
