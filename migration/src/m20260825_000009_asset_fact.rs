use sea_orm_migration::{prelude::*, schema::*};

static IDX_ASSET_FACT_USER_ID: &str = "idx_asset_fact_user_id";
static IDX_ASSET_FACT_LOCATION_ID: &str = "idx_asset_fact_location_id";
static UQ_ASSET_FACT_USER_ITEM: &str = "uq_asset_fact_user_item";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AssetFact::Table)
                    .if_not_exists()
                    .col(pk_auto(AssetFact::Id))
                    .col(big_integer(AssetFact::UserId))
                    .col(string(AssetFact::OwnerKind))
                    .col(big_integer(AssetFact::OwnerId))
                    .col(big_integer(AssetFact::ItemId))
                    .col(big_integer(AssetFact::TypeId))
                    .col(big_integer(AssetFact::Quantity))
                    .col(boolean(AssetFact::IsSingleton))
                    .col(big_integer(AssetFact::LocationId))
                    .col(string(AssetFact::LocationKind))
                    .col(string(AssetFact::LocationFlag))
                    .col(timestamp(AssetFact::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSET_FACT_USER_ID)
                    .table(AssetFact::Table)
                    .col(AssetFact::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSET_FACT_LOCATION_ID)
                    .table(AssetFact::Table)
                    .col(AssetFact::LocationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UQ_ASSET_FACT_USER_ITEM)
                    .table(AssetFact::Table)
                    .col(AssetFact::UserId)
                    .col(AssetFact::ItemId)
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
                    .name(UQ_ASSET_FACT_USER_ITEM)
                    .table(AssetFact::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSET_FACT_LOCATION_ID)
                    .table(AssetFact::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSET_FACT_USER_ID)
                    .table(AssetFact::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AssetFact::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AssetFact {
    Table,
    Id,
    UserId,
    OwnerKind,
    OwnerId,
    ItemId,
    TypeId,
    Quantity,
    IsSingleton,
    LocationId,
    LocationKind,
    LocationFlag,
    UpdatedAt,
}
