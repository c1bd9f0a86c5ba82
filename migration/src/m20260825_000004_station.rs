use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260825_000003_solar_system::SolarSystem;

static FK_STATION_SOLAR_SYSTEM_ID: &str = "fk_station_solar_system_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Station::Table)
                    .if_not_exists()
                    .col(big_integer(Station::StationId).primary_key())
                    .col(string(Station::Name))
                    .col(big_integer(Station::SolarSystemId))
                    .col(boolean(Station::IsNpc))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STATION_SOLAR_SYSTEM_ID)
                    .from_tbl(Station::Table)
                    .from_col(Station::SolarSystemId)
                    .to_tbl(SolarSystem::Table)
                    .to_col(SolarSystem::SolarSystemId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Station::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Station {
    Table,
    StationId,
    Name,
    SolarSystemId,
    IsNpc,
}
