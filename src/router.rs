//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa specifications,
//! which are collected into a unified OpenAPI document. Swagger UI serves
//! interactive documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `GET /api/assets` - Full nested asset tree for the current user
/// - `GET /api/assets/summary` - Portfolio value and deficit totals
/// - `GET /api/stockpiles/deficits` - Ordered stockpile deficit list
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Quartermaster", description = "Quartermaster API"), tags(
        (name = controller::asset::ASSET_TAG, description = "Asset tree API routes"),
        (name = controller::stockpile::STOCKPILE_TAG, description = "Stockpile API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::asset::get_asset_tree))
        .routes(routes!(controller::asset::get_asset_summary))
        .routes(routes!(controller::stockpile::get_stockpile_deficits))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
