use sea_orm::entity::prelude::*;

/// Corp-wide division definition. `kind` distinguishes hangar divisions from
/// wallet divisions; the asset engine only reads the hangar catalog.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "corporation_division")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i64,
    pub corporation_id: i64,
    pub division_number: i16,
    pub name: String,
    pub kind: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
