//! Asset aggregation engine.
//!
//! Each request runs the same pipeline: load a snapshot of every store, walk
//! container chains down to their stations, then shape the result into the
//! tree, the deficit list, or the summary totals. Dropped rows are counted
//! and logged, never fatal; a failed store read is.

use sea_orm::DatabaseConnection;

use crate::{
    error::asset::AssetError,
    model::dto::{AssetSummaryDto, AssetTreeDto, DeficitListDto},
};

pub mod deficit;
pub mod resolver;
pub mod snapshot;
pub mod tree;

#[cfg(test)]
mod tests;

use resolver::resolve_containers;
use snapshot::AssetSnapshot;

pub struct AssetService<'a> {
    db: &'a DatabaseConnection,
    market_region_id: i64,
}

impl<'a> AssetService<'a> {
    pub fn new(db: &'a DatabaseConnection, market_region_id: i64) -> Self {
        Self {
            db,
            market_region_id,
        }
    }

    /// Full nested asset tree for one user.
    pub async fn get_asset_tree(&self, user_id: i64) -> Result<AssetTreeDto, AssetError> {
        let snapshot = AssetSnapshot::load(self.db, user_id, self.market_region_id).await?;
        let resolution = resolve_containers(&snapshot);
        let outcome = tree::build_tree(&snapshot, &resolution);

        let dropped = outcome.inconsistencies + snapshot.skipped_facts;
        if dropped > 0 {
            tracing::warn!(user_id, dropped, "dropped inconsistent asset rows from tree");
        }

        Ok(outcome.tree)
    }

    /// Flat stockpile deficit list for one user, priced against the
    /// configured market region.
    pub async fn get_stockpile_deficits(&self, user_id: i64) -> Result<DeficitListDto, AssetError> {
        let snapshot = AssetSnapshot::load(self.db, user_id, self.market_region_id).await?;
        let resolution = resolve_containers(&snapshot);
        let outcome = deficit::build_deficits(&snapshot, &resolution);

        let dropped = outcome.inconsistencies + snapshot.skipped_facts;
        if dropped > 0 {
            tracing::warn!(
                user_id,
                dropped,
                "dropped inconsistent rows from deficit list"
            );
        }

        Ok(outcome.list)
    }

    /// Portfolio totals for one user.
    pub async fn get_summary(&self, user_id: i64) -> Result<AssetSummaryDto, AssetError> {
        let snapshot = AssetSnapshot::load(self.db, user_id, self.market_region_id).await?;
        let resolution = resolve_containers(&snapshot);

        Ok(deficit::build_summary(&snapshot, &resolution))
    }
}
