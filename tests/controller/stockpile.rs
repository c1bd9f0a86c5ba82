use axum::{extract::State, http::StatusCode, response::IntoResponse};
use quartermaster::{
    controller::stockpile::get_stockpile_deficits, model::session::SessionUserId,
};
use quartermaster_test_utils::prelude::*;

use super::app_state;

/// Expect 401 when no user is logged in
#[tokio::test]
async fn deficits_return_unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_asset_tables!()?;

    let result = get_stockpile_deficits(State(app_state(&test)), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 200 with an empty list when no targets are set
#[tokio::test]
async fn deficits_return_ok_for_logged_in_user() -> Result<(), TestError> {
    let test = test_setup_with_asset_tables!()?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = get_stockpile_deficits(State(app_state(&test)), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
