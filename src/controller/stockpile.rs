use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    controller::asset::unauthorized,
    error::Error,
    model::{api::ErrorDto, app::AppState, dto::DeficitListDto, session::SessionUserId},
    service::asset::AssetService,
};

pub static STOCKPILE_TAG: &str = "stockpile";

/// Get the stockpile deficit list for the logged in user
#[utoipa::path(
    get,
    path = "/api/stockpiles/deficits",
    tag = STOCKPILE_TAG,
    responses(
        (status = 200, description = "Success when retrieving stockpile deficits", body = DeficitListDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stockpile_deficits(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let Some(user_id) = SessionUserId::get(&session).await? else {
        return Ok(unauthorized());
    };

    let asset_service = AssetService::new(&state.db, state.market_region_id);
    let deficits = asset_service.get_stockpile_deficits(user_id).await?;

    Ok((StatusCode::OK, axum::Json(deficits)).into_response())
}
