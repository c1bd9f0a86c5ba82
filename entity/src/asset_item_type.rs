use sea_orm::entity::prelude::*;

/// Item type catalog entry. `is_container` is set once at ingestion and
/// replaces the legacy "type name ends with Container" convention.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "asset_item_type")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub type_id: i64,
    pub name: String,
    pub volume: f64,
    pub is_container: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
