use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260825_000001_region::Region;

static FK_CONSTELLATION_REGION_ID: &str = "fk_constellation_region_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Constellation::Table)
                    .if_not_exists()
                    .col(big_integer(Constellation::ConstellationId).primary_key())
                    .col(string(Constellation::Name))
                    .col(big_integer(Constellation::RegionId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONSTELLATION_REGION_ID)
                    .from_tbl(Constellation::Table)
                    .from_col(Constellation::RegionId)
                    .to_tbl(Region::Table)
                    .to_col(Region::RegionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Constellation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Constellation {
    Table,
    ConstellationId,
    Name,
    RegionId,
}
