//! User factory for creating test user accounts.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test users with customizable fields.
///
/// Defaults produce an active client with a fresh document type row and a
/// placeholder password hash. The referenced role row is created when it
/// does not exist yet.
///
/// # Example
///
/// ```rust,ignore
/// let admin = UsuarioFactory::new(&db)
///     .correoelectronico("administrador@animalbeats.com")
///     .id_rol(1)
///     .build()
///     .await?;
/// ```
pub struct UsuarioFactory<'a> {
    db: &'a DatabaseConnection,
    n_documento: String,
    nombre: String,
    correoelectronico: String,
    contrasena: String,
    id_rol: i32,
    estado: String,
}

impl<'a> UsuarioFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            n_documento: id.to_string(),
            nombre: format!("Usuario {}", id),
            correoelectronico: format!("usuario{}@example.com", id),
            contrasena: "$2b$10$abcdefghijklmnopqrstuv".to_string(),
            id_rol: 2,
            estado: "Activo".to_string(),
        }
    }

    pub fn n_documento(mut self, n_documento: impl Into<String>) -> Self {
        self.n_documento = n_documento.into();
        self
    }

    pub fn nombre(mut self, nombre: impl Into<String>) -> Self {
        self.nombre = nombre.into();
        self
    }

    pub fn correoelectronico(mut self, correo: impl Into<String>) -> Self {
        self.correoelectronico = correo.into();
        self
    }

    /// Sets the stored password hash (not the plain password).
    pub fn contrasena(mut self, hash: impl Into<String>) -> Self {
        self.contrasena = hash.into();
        self
    }

    pub fn id_rol(mut self, id_rol: i32) -> Self {
        self.id_rol = id_rol;
        self
    }

    pub fn estado(mut self, estado: impl Into<String>) -> Self {
        self.estado = estado.into();
        self
    }

    /// Builds and inserts the user, creating the document type row and the
    /// role row it references.
    pub async fn build(self) -> Result<entity::usuario::Model, DbErr> {
        let documento = crate::factory::documento::create_documento(self.db).await?;

        let label = match self.id_rol {
            1 => "admin",
            3 => "veterinario",
            _ => "cliente",
        };
        crate::factory::rol::ensure_rol(self.db, self.id_rol, label).await?;

        entity::usuario::ActiveModel {
            n_documento: ActiveValue::Set(self.n_documento),
            nombre: ActiveValue::Set(self.nombre),
            correoelectronico: ActiveValue::Set(self.correoelectronico),
            contrasena: ActiveValue::Set(self.contrasena),
            id_documento: ActiveValue::Set(documento.id),
            id_rol: ActiveValue::Set(self.id_rol),
            estado: ActiveValue::Set(self.estado),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active client user with default values.
pub async fn create_cliente(db: &DatabaseConnection) -> Result<entity::usuario::Model, DbErr> {
    UsuarioFactory::new(db).build().await
}

/// Creates an active admin user with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::usuario::Model, DbErr> {
    UsuarioFactory::new(db).id_rol(1).build().await
}

/// Creates an active veterinarian user with default values.
pub async fn create_veterinario_user(
    db: &DatabaseConnection,
) -> Result<entity::usuario::Model, DbErr> {
    UsuarioFactory::new(db).id_rol(3).build().await
}
