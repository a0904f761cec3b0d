use sea_orm::entity::prelude::*;

/// Species taxonomy entry with an optional public image URL.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "especie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub especie: String,
    pub imagen: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::raza::Entity")]
    Raza,
    #[sea_orm(has_many = "super::mascota::Entity")]
    Mascota,
}

impl Related<super::raza::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Raza.def()
    }
}

impl Related<super::mascota::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mascota.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
