use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260825_000002_constellation::Constellation;

static FK_SOLAR_SYSTEM_CONSTELLATION_ID: &str = "fk_solar_system_constellation_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SolarSystem::Table)
                    .if_not_exists()
                    .col(big_integer(SolarSystem::SolarSystemId).primary_key())
                    .col(string(SolarSystem::Name))
                    .col(big_integer(SolarSystem::ConstellationId))
                    .col(double(SolarSystem::Security))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SOLAR_SYSTEM_CONSTELLATION_ID)
                    .from_tbl(SolarSystem::Table)
                    .from_col(SolarSystem::ConstellationId)
                    .to_tbl(Constellation::Table)
                    .to_col(Constellation::ConstellationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SolarSystem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SolarSystem {
    Table,
    SolarSystemId,
    Name,
    ConstellationId,
    Security,
}
