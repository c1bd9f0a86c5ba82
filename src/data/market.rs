use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::model::asset::MarketQuote;

/// Latest market quotes per item type per region.
///
/// Reads are keyed by the configured trading hub region; the upsert is the
/// write path the external price updater uses on its refresh schedule.
pub struct MarketPriceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MarketPriceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_quotes_by_region(
        &self,
        region_id: i64,
        type_ids: &[i64],
    ) -> Result<Vec<(i64, MarketQuote)>, DbErr> {
        let models = entity::prelude::MarketPrice::find()
            .filter(entity::market_price::Column::RegionId.eq(region_id))
            .filter(entity::market_price::Column::TypeId.is_in(type_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                (
                    m.type_id,
                    MarketQuote {
                        buy_price: m.buy_price,
                        sell_price: m.sell_price,
                    },
                )
            })
            .collect())
    }

    pub async fn upsert_many(
        &self,
        region_id: i64,
        prices: Vec<(i64, Option<f64>, Option<f64>, Option<i64>)>, // (type_id, buy, sell, daily_volume)
    ) -> Result<(), DbErr> {
        if prices.is_empty() {
            return Ok(());
        }

        let models = prices
            .into_iter()
            .map(
                |(type_id, buy_price, sell_price, daily_volume)| entity::market_price::ActiveModel {
                    type_id: ActiveValue::Set(type_id),
                    region_id: ActiveValue::Set(region_id),
                    buy_price: ActiveValue::Set(buy_price),
                    sell_price: ActiveValue::Set(sell_price),
                    daily_volume: ActiveValue::Set(daily_volume),
                    updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                },
            );

        entity::prelude::MarketPrice::insert_many(models)
            .on_conflict(
                OnConflict::columns([
                    entity::market_price::Column::TypeId,
                    entity::market_price::Column::RegionId,
                ])
                .update_columns([
                    entity::market_price::Column::BuyPrice,
                    entity::market_price::Column::SellPrice,
                    entity::market_price::Column::DailyVolume,
                    entity::market_price::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
