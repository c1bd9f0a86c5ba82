use sea_orm_migration::{prelude::*, schema::*};

static UQ_ASSET_LOCATION_NAME_USER_ITEM: &str = "uq_asset_location_name_user_item";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AssetLocationName::Table)
                    .if_not_exists()
                    .col(pk_auto(AssetLocationName::Id))
                    .col(big_integer(AssetLocationName::UserId))
                    .col(big_integer(AssetLocationName::ItemId))
                    .col(string(AssetLocationName::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UQ_ASSET_LOCATION_NAME_USER_ITEM)
                    .table(AssetLocationName::Table)
                    .col(AssetLocationName::UserId)
                    .col(AssetLocationName::ItemId)
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
                    .name(UQ_ASSET_LOCATION_NAME_USER_ITEM)
                    .table(AssetLocationName::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AssetLocationName::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AssetLocationName {
    Table,
    Id,
    UserId,
    ItemId,
    Name,
}
