use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "solar_system")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub solar_system_id: i64,
    pub name: String,
    pub constellation_id: i64,
    pub security: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
