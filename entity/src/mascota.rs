use sea_orm::entity::prelude::*;

/// Pet owned by a client user.
///
/// Deletion is a soft status flip to "Suspendido"; the row stays retrievable
/// by id.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mascota")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub fecha_nacimiento: Date,
    pub estado: String,
    pub id_cliente: String,
    pub id_especie: i32,
    pub id_raza: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::usuario::Entity",
        from = "Column::IdCliente",
        to = "super::usuario::Column::NDocumento"
    )]
    Usuario,
    #[sea_orm(
        belongs_to = "super::especie::Entity",
        from = "Column::IdEspecie",
        to = "super::especie::Column::Id"
    )]
    Especie,
    #[sea_orm(
        belongs_to = "super::raza::Entity",
        from = "Column::IdRaza",
        to = "super::raza::Column::Id"
    )]
    Raza,
    #[sea_orm(has_many = "super::cita::Entity")]
    Cita,
    #[sea_orm(has_many = "super::recordatorio::Entity")]
    Recordatorio,
}

impl Related<super::usuario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Usuario.def()
    }
}

impl Related<super::especie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Especie.def()
    }
}

impl Related<super::raza::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Raza.def()
    }
}

impl Related<super::cita::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cita.def()
    }
}

impl Related<super::recordatorio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recordatorio.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
