use sea_orm::entity::prelude::*;

/// Service catalog (consultation, vaccination, ...). Read-only over HTTP.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "servicios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub servicio: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cita::Entity")]
    Cita,
}

impl Related<super::cita::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cita.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
