use axum::{extract::State, http::StatusCode, response::IntoResponse};
use quartermaster::{
    controller::asset::{get_asset_summary, get_asset_tree},
    model::session::SessionUserId,
};
use quartermaster_test_utils::prelude::*;

use super::app_state;

/// Expect 401 when no user is logged in
#[tokio::test]
async fn tree_returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_asset_tables!()?;

    let result = get_asset_tree(State(app_state(&test)), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 200 with an empty tree for a fresh logged-in user
#[tokio::test]
async fn tree_returns_ok_for_logged_in_user() -> Result<(), TestError> {
    let test = test_setup_with_asset_tables!()?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = get_asset_tree(State(app_state(&test)), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 with a populated tree once facts are stored
#[tokio::test]
async fn tree_returns_stored_assets() -> Result<(), TestError> {
    let test = test_setup_with_asset_tables!()?;
    let db = &test.state.db;

    factory::insert_station_chain(
        db,
        10000002,
        "The Forge",
        30000142,
        "Jita",
        60003760,
        "Jita IV - Moon 4",
    )
    .await?;
    factory::insert_item_type(db, 34, "Tritanium", 0.01, false).await?;
    factory::insert_character(db, 2114794365, "Test Pilot").await?;
    factory::insert_asset_fact(
        db, 1, "character", 2114794365, 100, 34, 500, false, 60003760, "station", "Hangar",
    )
    .await?;

    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = get_asset_tree(State(app_state(&test)), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 from the summary endpoint when no user is logged in
#[tokio::test]
async fn summary_returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_asset_tables!()?;

    let result = get_asset_summary(State(app_state(&test)), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 200 from the summary endpoint for a logged-in user
#[tokio::test]
async fn summary_returns_ok_for_logged_in_user() -> Result<(), TestError> {
    let test = test_setup_with_asset_tables!()?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = get_asset_summary(State(app_state(&test)), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
