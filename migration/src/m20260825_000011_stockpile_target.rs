use sea_orm_migration::{prelude::*, schema::*};

static IDX_STOCKPILE_TARGET_USER_ID: &str = "idx_stockpile_target_user_id";
static IDX_STOCKPILE_TARGET_USER_TYPE: &str = "idx_stockpile_target_user_type";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StockpileTarget::Table)
                    .if_not_exists()
                    .col(pk_auto(StockpileTarget::Id))
                    .col(big_integer(StockpileTarget::UserId))
                    .col(big_integer(StockpileTarget::TypeId))
                    .col(string(StockpileTarget::OwnerKind))
                    .col(big_integer(StockpileTarget::OwnerId))
                    .col(big_integer(StockpileTarget::LocationId))
                    .col(big_integer_null(StockpileTarget::ContainerId))
                    .col(small_integer_null(StockpileTarget::DivisionNumber))
                    .col(big_integer(StockpileTarget::DesiredQuantity))
                    .col(text_null(StockpileTarget::Notes))
                    .col(timestamp(StockpileTarget::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STOCKPILE_TARGET_USER_ID)
                    .table(StockpileTarget::Table)
                    .col(StockpileTarget::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STOCKPILE_TARGET_USER_TYPE)
                    .table(StockpileTarget::Table)
                    .col(StockpileTarget::UserId)
                    .col(StockpileTarget::TypeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STOCKPILE_TARGET_USER_TYPE)
                    .table(StockpileTarget::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STOCKPILE_TARGET_USER_ID)
                    .table(StockpileTarget::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StockpileTarget::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StockpileTarget {
    Table,
    Id,
    UserId,
    TypeId,
    OwnerKind,
    OwnerId,
    LocationId,
    ContainerId,
    DivisionNumber,
    DesiredQuantity,
    Notes,
    UpdatedAt,
}
