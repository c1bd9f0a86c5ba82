//! Database fixture factories for asset engine tests.
//!
//! Each helper inserts one row (or one chain of rows) with sensible test
//! defaults and returns the inserted model. Identifiers are always supplied
//! by the caller so tests stay explicit about the shape they build.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::error::TestError;

/// Insert a full map chain: region, constellation, solar system, station.
///
/// The constellation id is derived from the solar system id since the asset
/// engine never addresses constellations directly.
pub async fn insert_station_chain(
    db: &DatabaseConnection,
    region_id: i64,
    region_name: &str,
    solar_system_id: i64,
    solar_system_name: &str,
    station_id: i64,
    station_name: &str,
) -> Result<entity::station::Model, TestError> {
    let constellation_id = solar_system_id * 10;

    entity::region::ActiveModel {
        region_id: Set(region_id),
        name: Set(region_name.to_string()),
    }
    .insert(db)
    .await?;

    entity::constellation::ActiveModel {
        constellation_id: Set(constellation_id),
        name: Set(format!("{solar_system_name} Constellation")),
        region_id: Set(region_id),
    }
    .insert(db)
    .await?;

    entity::solar_system::ActiveModel {
        solar_system_id: Set(solar_system_id),
        name: Set(solar_system_name.to_string()),
        constellation_id: Set(constellation_id),
        security: Set(0.9),
    }
    .insert(db)
    .await?;

    let station = entity::station::ActiveModel {
        station_id: Set(station_id),
        name: Set(station_name.to_string()),
        solar_system_id: Set(solar_system_id),
        is_npc: Set(true),
    }
    .insert(db)
    .await?;

    Ok(station)
}

pub async fn insert_item_type(
    db: &DatabaseConnection,
    type_id: i64,
    name: &str,
    volume: f64,
    is_container: bool,
) -> Result<entity::asset_item_type::Model, TestError> {
    let item_type = entity::asset_item_type::ActiveModel {
        type_id: Set(type_id),
        name: Set(name.to_string()),
        volume: Set(volume),
        is_container: Set(is_container),
    }
    .insert(db)
    .await?;

    Ok(item_type)
}

pub async fn insert_character(
    db: &DatabaseConnection,
    character_id: i64,
    name: &str,
) -> Result<entity::eve_character::Model, TestError> {
    let character = entity::eve_character::ActiveModel {
        character_id: Set(character_id),
        name: Set(name.to_string()),
    }
    .insert(db)
    .await?;

    Ok(character)
}

pub async fn insert_corporation(
    db: &DatabaseConnection,
    corporation_id: i64,
    name: &str,
) -> Result<entity::eve_corporation::Model, TestError> {
    let corporation = entity::eve_corporation::ActiveModel {
        corporation_id: Set(corporation_id),
        name: Set(name.to_string()),
    }
    .insert(db)
    .await?;

    Ok(corporation)
}

pub async fn insert_hangar_division(
    db: &DatabaseConnection,
    user_id: i64,
    corporation_id: i64,
    division_number: i16,
    name: &str,
) -> Result<entity::corporation_division::Model, TestError> {
    let division = entity::corporation_division::ActiveModel {
        user_id: Set(user_id),
        corporation_id: Set(corporation_id),
        division_number: Set(division_number),
        name: Set(name.to_string()),
        kind: Set("hangar".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(division)
}

#[allow(clippy::too_many_arguments)]
pub async fn insert_asset_fact(
    db: &DatabaseConnection,
    user_id: i64,
    owner_kind: &str,
    owner_id: i64,
    item_id: i64,
    type_id: i64,
    quantity: i64,
    is_singleton: bool,
    location_id: i64,
    location_kind: &str,
    location_flag: &str,
) -> Result<entity::asset_fact::Model, TestError> {
    let fact = entity::asset_fact::ActiveModel {
        user_id: Set(user_id),
        owner_kind: Set(owner_kind.to_string()),
        owner_id: Set(owner_id),
        item_id: Set(item_id),
        type_id: Set(type_id),
        quantity: Set(quantity),
        is_singleton: Set(is_singleton),
        location_id: Set(location_id),
        location_kind: Set(location_kind.to_string()),
        location_flag: Set(location_flag.to_string()),
        updated_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(fact)
}

pub async fn insert_location_name(
    db: &DatabaseConnection,
    user_id: i64,
    item_id: i64,
    name: &str,
) -> Result<entity::asset_location_name::Model, TestError> {
    let row = entity::asset_location_name::ActiveModel {
        user_id: Set(user_id),
        item_id: Set(item_id),
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(row)
}

#[allow(clippy::too_many_arguments)]
pub async fn insert_stockpile_target(
    db: &DatabaseConnection,
    user_id: i64,
    type_id: i64,
    owner_kind: &str,
    owner_id: i64,
    location_id: i64,
    container_id: Option<i64>,
    division_number: Option<i16>,
    desired_quantity: i64,
) -> Result<entity::stockpile_target::Model, TestError> {
    let target = entity::stockpile_target::ActiveModel {
        user_id: Set(user_id),
        type_id: Set(type_id),
        owner_kind: Set(owner_kind.to_string()),
        owner_id: Set(owner_id),
        location_id: Set(location_id),
        container_id: Set(container_id),
        division_number: Set(division_number),
        desired_quantity: Set(desired_quantity),
        notes: Set(None),
        updated_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(target)
}

pub async fn insert_market_price(
    db: &DatabaseConnection,
    type_id: i64,
    region_id: i64,
    buy_price: Option<f64>,
    sell_price: Option<f64>,
) -> Result<entity::market_price::Model, TestError> {
    let price = entity::market_price::ActiveModel {
        type_id: Set(type_id),
        region_id: Set(region_id),
        buy_price: Set(buy_price),
        sell_price: Set(sell_price),
        daily_volume: Set(None),
        updated_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(price)
}
