use sea_orm::DatabaseConnection;

use crate::data::role::RoleRepository;
use crate::error::AppError;
use crate::model::role::{CreateRoleDto, CreateRoleResponseDto, RoleDto, RoleListDto};

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<RoleListDto, AppError> {
        let repo = RoleRepository::new(self.db);
        let roles = repo.list().await?;

        Ok(RoleListDto {
            roles: roles.into_iter().map(RoleDto::from).collect(),
        })
    }

    pub async fn create(&self, dto: CreateRoleDto) -> Result<CreateRoleResponseDto, AppError> {
        let rol = match dto.rol {
            Some(rol) if !rol.trim().is_empty() => rol.trim().to_string(),
            _ => return Err(AppError::BadRequest("El rol es obligatorio".to_string())),
        };

        let repo = RoleRepository::new(self.db);
        let created = repo.create(rol).await?;

        Ok(CreateRoleResponseDto {
            message: "Rol creado correctamente".to_string(),
            id: created.id,
        })
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = RoleRepository::new(self.db);

        if repo.delete(id).await? == 0 {
            return Err(AppError::NotFound("Rol no encontrado".to_string()));
        }

        Ok(())
    }
}
