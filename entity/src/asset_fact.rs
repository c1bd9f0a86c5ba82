use sea_orm::entity::prelude::*;

/// One observed inventory row from the periodic asset ingestion. `item_id`
/// doubles as the location anchor for facts nested inside this item.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "asset_fact")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i64,
    pub owner_kind: String,
    pub owner_id: i64,
    pub item_id: i64,
    pub type_id: i64,
    pub quantity: i64,
    pub is_singleton: bool,
    pub location_id: i64,
    pub location_kind: String,
    pub location_flag: String,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
