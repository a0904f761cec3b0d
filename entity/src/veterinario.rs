use sea_orm::entity::prelude::*;

/// Veterinarian profile. `activo = false` is the soft-delete marker.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "veterinarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre_completo: String,
    pub estudios_especialidad: String,
    pub edad: i32,
    pub altura: f64,
    pub anios_experiencia: i32,
    pub imagen_url: Option<String>,
    pub activo: bool,
    pub creado_en: DateTimeUtc,
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
