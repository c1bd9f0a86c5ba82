use sea_orm_migration::{prelude::*, schema::*};

static IDX_CORPORATION_DIVISION_USER_ID: &str = "idx_corporation_division_user_id";
static UQ_CORPORATION_DIVISION_KEY: &str = "uq_corporation_division_key";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CorporationDivision::Table)
                    .if_not_exists()
                    .col(pk_auto(CorporationDivision::Id))
                    .col(big_integer(CorporationDivision::UserId))
                    .col(big_integer(CorporationDivision::CorporationId))
                    .col(small_integer(CorporationDivision::DivisionNumber))
                    .col(string(CorporationDivision::Name))
                    .col(string(CorporationDivision::Kind))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CORPORATION_DIVISION_USER_ID)
                    .table(CorporationDivision::Table)
                    .col(CorporationDivision::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UQ_CORPORATION_DIVISION_KEY)
                    .table(CorporationDivision::Table)
                    .col(CorporationDivision::UserId)
                    .col(CorporationDivision::CorporationId)
                    .col(CorporationDivision::DivisionNumber)
                    .col(CorporationDivision::Kind)
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
                    .name(UQ_CORPORATION_DIVISION_KEY)
                    .table(CorporationDivision::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CORPORATION_DIVISION_USER_ID)
                    .table(CorporationDivision::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CorporationDivision::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CorporationDivision {
    Table,
    Id,
    UserId,
    CorporationId,
    DivisionNumber,
    Name,
    Kind,
}
