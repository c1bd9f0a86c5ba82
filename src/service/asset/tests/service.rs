use quartermaster_test_utils::prelude::*;

use super::{CHARACTER_ID, CORPORATION_ID, JITA_STATION_ID, STATION_CONTAINER, TRITANIUM, USER_ID};
use crate::{config::DEFAULT_MARKET_REGION_ID, error::asset::AssetError, service::asset::AssetService};

/// Expect an empty tree for a user with no asset facts
#[tokio::test]
async fn returns_empty_tree_without_facts() -> Result<(), TestError> {
    let test = test_setup_with_asset_tables!()?;

    let service = AssetService::new(&test.state.db, DEFAULT_MARKET_REGION_ID);
    let tree = service.get_asset_tree(USER_ID).await.unwrap();

    assert!(tree.stations.is_empty());

    Ok(())
}

/// Expect the full pipeline to build the tree and deficits from stored rows
#[tokio::test]
async fn builds_tree_and_deficits_from_stored_rows() -> Result<(), TestError> {
    let test = test_setup_with_asset_tables!()?;
    let db = &test.state.db;

    factory::insert_station_chain(
        db,
        10000002,
        "The Forge",
        30000142,
        "Jita",
        JITA_STATION_ID,
        "Jita IV - Moon 4",
    )
    .await?;
    factory::insert_item_type(db, TRITANIUM, "Tritanium", 0.01, false).await?;
    factory::insert_item_type(db, STATION_CONTAINER, "Station Container", 10_000.0, true).await?;
    factory::insert_character(db, CHARACTER_ID, "Test Pilot").await?;
    factory::insert_corporation(db, CORPORATION_ID, "Test Corp").await?;
    factory::insert_hangar_division(db, USER_ID, CORPORATION_ID, 1, "Minerals").await?;

    // Loose tritanium, a named container, and tritanium inside it.
    factory::insert_asset_fact(
        db, USER_ID, "character", CHARACTER_ID, 100, TRITANIUM, 500, false, JITA_STATION_ID,
        "station", "Hangar",
    )
    .await?;
    factory::insert_asset_fact(
        db, USER_ID, "character", CHARACTER_ID, 1000, STATION_CONTAINER, 1, true,
        JITA_STATION_ID, "station", "Hangar",
    )
    .await?;
    factory::insert_asset_fact(
        db, USER_ID, "character", CHARACTER_ID, 101, TRITANIUM, 200, false, 1000, "item",
        "Unlocked",
    )
    .await?;
    factory::insert_location_name(db, USER_ID, 1000, "Ore Box").await?;

    // Corp stock in division 1.
    factory::insert_asset_fact(
        db, USER_ID, "corporation", CORPORATION_ID, 102, TRITANIUM, 50, false, JITA_STATION_ID,
        "station", "CorpSAG1",
    )
    .await?;

    factory::insert_stockpile_target(
        db,
        USER_ID,
        TRITANIUM,
        "character",
        CHARACTER_ID,
        JITA_STATION_ID,
        Some(1000),
        None,
        1000,
    )
    .await?;
    factory::insert_market_price(db, TRITANIUM, DEFAULT_MARKET_REGION_ID, Some(4.0), Some(5.0))
        .await?;

    let service = AssetService::new(db, DEFAULT_MARKET_REGION_ID);

    let tree = service.get_asset_tree(USER_ID).await.unwrap();
    assert_eq!(tree.stations.len(), 1);
    let station = &tree.stations[0];
    assert_eq!(station.name, "Jita IV - Moon 4");
    assert_eq!(station.hangar_assets.len(), 1);
    assert_eq!(station.hangar_containers.len(), 1);
    assert_eq!(station.hangar_containers[0].name, "Ore Box");
    assert_eq!(station.hangar_containers[0].assets[0].quantity, 200);
    assert_eq!(station.corporation_hangars.len(), 1);
    assert_eq!(station.corporation_hangars[0].name, "Minerals");
    assert_eq!(station.corporation_hangars[0].assets[0].quantity, 50);

    let deficits = service.get_stockpile_deficits(USER_ID).await.unwrap();
    assert_eq!(deficits.items.len(), 1);
    let row = &deficits.items[0];
    assert_eq!(row.quantity, 200);
    assert_eq!(row.delta, -800);
    assert_eq!(row.deficit_value, 3200.0);
    assert_eq!(row.container_name.as_deref(), Some("Ore Box"));

    let summary = service.get_summary(USER_ID).await.unwrap();
    // 500 + 200 + 50 tritanium at 5.0 sell; the container has no quote.
    assert_eq!(summary.total_value, 3750.0);
    assert_eq!(summary.total_deficit, 3200.0);

    Ok(())
}

/// Expect another user's rows to stay invisible
#[tokio::test]
async fn scopes_rows_to_the_requesting_user() -> Result<(), TestError> {
    let test = test_setup_with_asset_tables!()?;
    let db = &test.state.db;

    factory::insert_station_chain(
        db,
        10000002,
        "The Forge",
        30000142,
        "Jita",
        JITA_STATION_ID,
        "Jita IV - Moon 4",
    )
    .await?;
    factory::insert_item_type(db, TRITANIUM, "Tritanium", 0.01, false).await?;
    factory::insert_asset_fact(
        db, 2, "character", CHARACTER_ID, 100, TRITANIUM, 500, false, JITA_STATION_ID,
        "station", "Hangar",
    )
    .await?;

    let service = AssetService::new(db, DEFAULT_MARKET_REGION_ID);
    let tree = service.get_asset_tree(USER_ID).await.unwrap();

    assert!(tree.stations.is_empty());

    Ok(())
}

/// Expect a target with nothing held to surface the full desired amount, priced
#[tokio::test]
async fn zero_held_target_yields_full_deficit() -> Result<(), TestError> {
    let test = test_setup_with_asset_tables!()?;
    let db = &test.state.db;

    factory::insert_station_chain(
        db,
        10000002,
        "The Forge",
        30000142,
        "Jita",
        JITA_STATION_ID,
        "Jita IV - Moon 4",
    )
    .await?;
    factory::insert_item_type(db, TRITANIUM, "Tritanium", 0.01, false).await?;
    factory::insert_character(db, CHARACTER_ID, "Test Pilot").await?;
    factory::insert_stockpile_target(
        db,
        USER_ID,
        TRITANIUM,
        "character",
        CHARACTER_ID,
        JITA_STATION_ID,
        None,
        None,
        100,
    )
    .await?;
    factory::insert_market_price(db, TRITANIUM, DEFAULT_MARKET_REGION_ID, Some(2.0), Some(3.0))
        .await?;

    let service = AssetService::new(db, DEFAULT_MARKET_REGION_ID);

    // No asset facts at all; the target alone must drive the row.
    let deficits = service.get_stockpile_deficits(USER_ID).await.unwrap();
    assert_eq!(deficits.items.len(), 1);
    let row = &deficits.items[0];
    assert_eq!(row.quantity, 0);
    assert_eq!(row.delta, -100);
    assert_eq!(row.deficit_value, 200.0);
    assert_eq!(row.name, "Tritanium");
    assert_eq!(row.owner_name, "Test Pilot");
    assert_eq!(row.structure_name, "Jita IV - Moon 4");

    let summary = service.get_summary(USER_ID).await.unwrap();
    assert_eq!(summary.total_value, 0.0);
    assert_eq!(summary.total_deficit, 200.0);

    Ok(())
}

/// Expect prices from other regions to be ignored
#[tokio::test]
async fn prices_against_configured_region_only() -> Result<(), TestError> {
    let test = test_setup_with_asset_tables!()?;
    let db = &test.state.db;

    factory::insert_station_chain(
        db,
        10000002,
        "The Forge",
        30000142,
        "Jita",
        JITA_STATION_ID,
        "Jita IV - Moon 4",
    )
    .await?;
    factory::insert_item_type(db, TRITANIUM, "Tritanium", 0.01, false).await?;
    factory::insert_character(db, CHARACTER_ID, "Test Pilot").await?;
    factory::insert_stockpile_target(
        db,
        USER_ID,
        TRITANIUM,
        "character",
        CHARACTER_ID,
        JITA_STATION_ID,
        None,
        None,
        100,
    )
    .await?;
    // Domain region price only.
    factory::insert_market_price(db, TRITANIUM, 10000043, Some(9.0), Some(9.0)).await?;

    let service = AssetService::new(db, DEFAULT_MARKET_REGION_ID);
    let deficits = service.get_stockpile_deficits(USER_ID).await.unwrap();

    assert_eq!(deficits.items.len(), 1);
    assert_eq!(deficits.items[0].deficit_value, 0.0);

    Ok(())
}

/// Expect a typed error naming the asset store when tables are missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let service = AssetService::new(&test.state.db, DEFAULT_MARKET_REGION_ID);
    let result = service.get_asset_tree(USER_ID).await;

    assert!(matches!(result, Err(AssetError::AssetFacts(_))));

    Ok(())
}
