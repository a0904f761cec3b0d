use sea_orm::entity::prelude::*;

/// Reminder created by a client for one of their pets.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recordatorios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_cliente: String,
    pub id_mascota: i32,
    pub fecha: DateTimeUtc,
    pub descripcion: String,
    pub estado: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mascota::Entity",
        from = "Column::IdMascota",
        to = "super::mascota::Column::Id"
    )]
    Mascota,
    #[sea_orm(
        belongs_to = "super::usuario::Entity",
        from = "Column::IdCliente",
        to = "super::usuario::Column::NDocumento"
    )]
    Usuario,
}

impl Related<super::mascota::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mascota.def()
    }
}

impl Related<super::usuario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Usuario.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
