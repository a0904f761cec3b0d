use sea_orm::entity::prelude::*;

/// Breed belonging to exactly one species.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "raza")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub raza: String,
    pub descripcion: Option<String>,
    pub imagen: Option<String>,
    pub id_especie: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::especie::Entity",
        from = "Column::IdEspecie",
        to = "super::especie::Column::Id"
    )]
    Especie,
    #[sea_orm(has_many = "super::mascota::Entity")]
    Mascota,
}

impl Related<super::especie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Especie.def()
    }
}

impl Related<super::mascota::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mascota.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
