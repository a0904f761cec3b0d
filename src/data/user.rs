use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::user::{CreateUserParams, UserWithDocumento};

pub const ESTADO_ACTIVO: &str = "Activo";
pub const ESTADO_SUSPENDIDO: &str = "Suspendido";

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active user. The password must already be hashed.
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::usuario::Model, DbErr> {
        entity::usuario::ActiveModel {
            n_documento: ActiveValue::Set(params.n_documento),
            nombre: ActiveValue::Set(params.nombre),
            correoelectronico: ActiveValue::Set(params.correoelectronico),
            contrasena: ActiveValue::Set(params.contrasena_hash),
            id_documento: ActiveValue::Set(params.id_documento),
            id_rol: ActiveValue::Set(params.id_rol),
            estado: ActiveValue::Set(ESTADO_ACTIVO.to_string()),
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_documento(
        &self,
        n_documento: &str,
    ) -> Result<Option<entity::usuario::Model>, DbErr> {
        entity::prelude::Usuario::find_by_id(n_documento.to_string())
            .one(self.db)
            .await
    }

    pub async fn get_by_correo(
        &self,
        correoelectronico: &str,
    ) -> Result<Option<entity::usuario::Model>, DbErr> {
        entity::prelude::Usuario::find()
            .filter(entity::usuario::Column::Correoelectronico.eq(correoelectronico))
            .one(self.db)
            .await
    }

    /// Gets a user by document number with its document type label.
    pub async fn get_with_documento(
        &self,
        n_documento: &str,
    ) -> Result<Option<UserWithDocumento>, DbErr> {
        let result = entity::prelude::Usuario::find_by_id(n_documento.to_string())
            .find_also_related(entity::prelude::Documento)
            .one(self.db)
            .await?;

        Ok(result.map(|(usuario, documento)| UserWithDocumento {
            usuario,
            documento: documento.map(|d| d.tipo),
        }))
    }

    /// Lists every non-suspended user with its document type label.
    pub async fn list_active(&self) -> Result<Vec<UserWithDocumento>, DbErr> {
        let rows = entity::prelude::Usuario::find()
            .find_also_related(entity::prelude::Documento)
            .filter(entity::usuario::Column::Estado.ne(ESTADO_SUSPENDIDO))
            .order_by_asc(entity::usuario::Column::Nombre)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(usuario, documento)| UserWithDocumento {
                usuario,
                documento: documento.map(|d| d.tipo),
            })
            .collect())
    }

    /// Updates the editable profile fields of a user.
    pub async fn update(
        &self,
        n_documento: &str,
        nombre: String,
        correoelectronico: String,
        id_documento: i32,
        id_rol: i32,
    ) -> Result<Option<entity::usuario::Model>, DbErr> {
        let Some(usuario) = self.get_by_documento(n_documento).await? else {
            return Ok(None);
        };

        let mut active_model: entity::usuario::ActiveModel = usuario.into();
        active_model.nombre = ActiveValue::Set(nombre);
        active_model.correoelectronico = ActiveValue::Set(correoelectronico);
        active_model.id_documento = ActiveValue::Set(id_documento);
        active_model.id_rol = ActiveValue::Set(id_rol);
        // A profile edit reactivates the account.
        active_model.estado = ActiveValue::Set(ESTADO_ACTIVO.to_string());

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Sets the account status. The row is never removed.
    pub async fn set_estado(
        &self,
        n_documento: &str,
        estado: &str,
    ) -> Result<Option<entity::usuario::Model>, DbErr> {
        let Some(usuario) = self.get_by_documento(n_documento).await? else {
            return Ok(None);
        };

        let mut active_model: entity::usuario::ActiveModel = usuario.into();
        active_model.estado = ActiveValue::Set(estado.to_string());

        Ok(Some(active_model.update(self.db).await?))
    }

    /// First user holding the given role, by document number.
    pub async fn first_by_rol(&self, id_rol: i32) -> Result<Option<entity::usuario::Model>, DbErr> {
        entity::prelude::Usuario::find()
            .filter(entity::usuario::Column::IdRol.eq(id_rol))
            .order_by_asc(entity::usuario::Column::NDocumento)
            .one(self.db)
            .await
    }

    /// Counts users holding any of the given roles.
    pub async fn count_by_roles(&self, roles: &[i32]) -> Result<u64, DbErr> {
        entity::prelude::Usuario::find()
            .filter(entity::usuario::Column::IdRol.is_in(roles.iter().copied()))
            .count(self.db)
            .await
    }
}
