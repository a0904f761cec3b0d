use sea_orm::entity::prelude::*;

/// Appointment linking a pet, its client, a service and a veterinarian.
///
/// `estado` follows the lifecycle Pendiente -> Confirmado -> Cancelado with
/// no exit from Cancelado. Rows are never deleted, only transitioned.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "citas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_mascota: i32,
    pub id_cliente: String,
    pub id_servicio: i32,
    pub id_veterinario: i32,
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
    #[sea_orm(
        belongs_to = "super::servicio::Entity",
        from = "Column::IdServicio",
        to = "super::servicio::Column::Id"
    )]
    Servicio,
    #[sea_orm(
        belongs_to = "super::veterinario::Entity",
        from = "Column::IdVeterinario",
        to = "super::veterinario::Column::Id"
    )]
    Veterinario,
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

impl Related<super::servicio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Servicio.def()
    }
}

impl Related<super::veterinario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Veterinario.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
