use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        dto::{AssetSummaryDto, AssetTreeDto},
        session::SessionUserId,
    },
    service::asset::AssetService,
};

pub static ASSET_TAG: &str = "asset";

/// Get the full nested asset tree for the logged in user
#[utoipa::path(
    get,
    path = "/api/assets",
    tag = ASSET_TAG,
    responses(
        (status = 200, description = "Success when retrieving the asset tree", body = AssetTreeDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_asset_tree(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let Some(user_id) = SessionUserId::get(&session).await? else {
        return Ok(unauthorized());
    };

    let asset_service = AssetService::new(&state.db, state.market_region_id);
    let tree = asset_service.get_asset_tree(user_id).await?;

    Ok((StatusCode::OK, axum::Json(tree)).into_response())
}

/// Get portfolio totals for the logged in user
#[utoipa::path(
    get,
    path = "/api/assets/summary",
    tag = ASSET_TAG,
    responses(
        (status = 200, description = "Success when retrieving the asset summary", body = AssetSummaryDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_asset_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let Some(user_id) = SessionUserId::get(&session).await? else {
        return Ok(unauthorized());
    };

    let asset_service = AssetService::new(&state.db, state.market_region_id);
    let summary = asset_service.get_summary(user_id).await?;

    Ok((StatusCode::OK, axum::Json(summary)).into_response())
}

pub(super) fn unauthorized() -> axum::response::Response {
    (
        StatusCode::UNAUTHORIZED,
        axum::Json(ErrorDto {
            error: "Not logged in".to_string(),
        }),
    )
        .into_response()
}
