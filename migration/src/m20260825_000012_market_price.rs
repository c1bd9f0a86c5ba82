use sea_orm_migration::{prelude::*, schema::*};

static UQ_MARKET_PRICE_TYPE_REGION: &str = "uq_market_price_type_region";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MarketPrice::Table)
                    .if_not_exists()
                    .col(pk_auto(MarketPrice::Id))
                    .col(big_integer(MarketPrice::TypeId))
                    .col(big_integer(MarketPrice::RegionId))
                    .col(double_null(MarketPrice::BuyPrice))
                    .col(double_null(MarketPrice::SellPrice))
                    .col(big_integer_null(MarketPrice::DailyVolume))
                    .col(timestamp(MarketPrice::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UQ_MARKET_PRICE_TYPE_REGION)
                    .table(MarketPrice::Table)
                    .col(MarketPrice::TypeId)
                    .col(MarketPrice::RegionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(UQ_MARKET_PRICE_TYPE_REGION)
                    .table(MarketPrice::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MarketPrice::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MarketPrice {
    Table,
    Id,
    TypeId,
    RegionId,
    BuyPrice,
    SellPrice,
    DailyVolume,
    UpdatedAt,
}
