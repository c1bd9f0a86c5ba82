use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use thiserror::Error;

use crate::error::InternalServerError;

/// Fatal failures while assembling an aggregation snapshot.
///
/// Each variant names the upstream store whose bulk read failed; a partial
/// tree without station names or prices is worse than no result, so the whole
/// request fails. Retry policy, if any, belongs to the caller.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to read asset facts: {0}")]
    AssetFacts(#[source] DbErr),
    #[error("failed to read asset location names: {0}")]
    AssetNames(#[source] DbErr),
    #[error("failed to read item type catalog: {0}")]
    ItemTypes(#[source] DbErr),
    #[error("failed to read station catalog: {0}")]
    Stations(#[source] DbErr),
    #[error("failed to read owner catalog: {0}")]
    Owners(#[source] DbErr),
    #[error("failed to read corporation divisions: {0}")]
    Divisions(#[source] DbErr),
    #[error("failed to read stockpile targets: {0}")]
    StockpileTargets(#[source] DbErr),
    #[error("failed to read market prices: {0}")]
    MarketPrices(#[source] DbErr),
}

impl IntoResponse for AssetError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
