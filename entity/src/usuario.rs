use sea_orm::entity::prelude::*;

/// User account keyed by the natural document number.
///
/// `estado` is one of "Activo", "Suspendido" or "Pendiente"; suspended rows
/// are excluded from default listings but never removed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub n_documento: String,
    pub nombre: String,
    #[sea_orm(unique)]
    pub correoelectronico: String,
    /// bcrypt hash, never the plain password.
    pub contrasena: String,
    pub id_documento: i32,
    pub id_rol: i32,
    pub estado: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::documento::Entity",
        from = "Column::IdDocumento",
        to = "super::documento::Column::Id"
    )]
    Documento,
    #[sea_orm(
        belongs_to = "super::rol::Entity",
        from = "Column::IdRol",
        to = "super::rol::Column::Id"
    )]
    Rol,
    #[sea_orm(has_many = "super::mascota::Entity")]
    Mascota,
}

impl Related<super::documento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Documento.def()
    }
}

impl Related<super::rol::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rol.def()
    }
}

impl Related<super::mascota::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mascota.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
