use sea_orm::entity::prelude::*;

/// User-declared desired quantity, keyed by the full natural tuple.
/// `container_id` and `division_number` are both null for targets on
/// assets sitting loose at a station.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stockpile_target")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i64,
    pub type_id: i64,
    pub owner_kind: String,
    pub owner_id: i64,
    pub location_id: i64,
    pub container_id: Option<i64>,
    pub division_number: Option<i16>,
    pub desired_quantity: i64,
    pub notes: Option<String>,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
