use sea_orm::entity::prelude::*;

/// Role lookup. Ids 1 (admin), 2 (cliente) and 3 (veterinario) are
/// special-cased by the application; further rows may be added via CRUD.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rol")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rol: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::usuario::Entity")]
    Usuario,
}

impl Related<super::usuario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Usuario.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
