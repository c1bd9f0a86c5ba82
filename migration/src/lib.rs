pub use sea_orm_migration::prelude::*;

mod m20260825_000001_region;
mod m20260825_000002_constellation;
mod m20260825_000003_solar_system;
mod m20260825_000004_station;
mod m20260825_000005_asset_item_type;
mod m20260825_000006_eve_character;
mod m20260825_000007_eve_corporation;
mod m20260825_000008_corporation_division;
mod m20260825_000009_asset_fact;
mod m20260825_000010_asset_location_name;
mod m20260825_000011_stockpile_target;
mod m20260825_000012_market_price;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260825_000001_region::Migration),
            Box::new(m20260825_000002_constellation::Migration),
            Box::new(m20260825_000003_solar_system::Migration),
            Box::new(m20260825_000004_station::Migration),
            Box::new(m20260825_000005_asset_item_type::Migration),
            Box::new(m20260825_000006_eve_character::Migration),
            Box::new(m20260825_000007_eve_corporation::Migration),
            Box::new(m20260825_000008_corporation_division::Migration),
            Box::new(m20260825_000009_asset_fact::Migration),
            Box::new(m20260825_000010_asset_location_name::Migration),
            Box::new(m20260825_000011_stockpile_target::Migration),
            Box::new(m20260825_000012_market_price::Migration),
        ]
    }
}
