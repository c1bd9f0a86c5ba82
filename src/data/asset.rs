use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Reads the raw asset facts and player-assigned item names for a user.
///
/// Both tables are written by the external ingestion updater; this engine
/// only ever bulk-reads them for one aggregation pass.
pub struct AssetFactRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssetFactRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All asset facts for a user, ordered by item id for deterministic passes.
    pub async fn get_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<entity::asset_fact::Model>, DbErr> {
        entity::prelude::AssetFact::find()
            .filter(entity::asset_fact::Column::UserId.eq(user_id))
            .order_by_asc(entity::asset_fact::Column::ItemId)
            .all(self.db)
            .await
    }

    /// Player-assigned display names keyed by item id.
    pub async fn get_names_by_user(&self, user_id: i64) -> Result<Vec<(i64, String)>, DbErr> {
        use sea_orm::QuerySelect;

        entity::prelude::AssetLocationName::find()
            .select_only()
            .column(entity::asset_location_name::Column::ItemId)
            .column(entity::asset_location_name::Column::Name)
            .filter(entity::asset_location_name::Column::UserId.eq(user_id))
            .into_tuple::<(i64, String)>()
            .all(self.db)
            .await
    }
}
