use sea_orm::entity::prelude::*;

/// Latest buy/sell price per item type per region, refreshed by the external
/// market price updater.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "market_price")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub type_id: i64,
    pub region_id: i64,
    pub buy_price: Option<f64>,
    pub sell_price: Option<f64>,
    pub daily_volume: Option<i64>,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
