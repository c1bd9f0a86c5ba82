//! API response DTOs for the asset tree, deficit list, and summary endpoints.

use serde::{Deserialize, Serialize};

/// A quantity of one item type held by one owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AssetDto {
    pub name: String,
    pub type_id: i64,
    pub quantity: i64,
    /// Total volume in m3 (unit volume x quantity).
    pub volume: f64,
    pub owner_kind: String,
    pub owner_name: String,
    pub owner_id: i64,
}

/// A container and the items directly inside it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ContainerDto {
    /// The container's own item id.
    pub id: i64,
    /// Player-assigned name, falling back to the type name.
    pub name: String,
    pub owner_kind: String,
    pub owner_name: String,
    pub owner_id: i64,
    pub assets: Vec<AssetDto>,
}

/// One corporation hangar division materialized at one station.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CorporationHangarDto {
    pub division_number: i16,
    pub name: String,
    pub corporation_id: i64,
    pub corporation_name: String,
    pub assets: Vec<AssetDto>,
    pub containers: Vec<ContainerDto>,
}

/// One station (or structure) with everything the user holds there.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StationNodeDto {
    pub id: i64,
    pub name: String,
    pub solar_system: String,
    pub region: String,
    pub hangar_assets: Vec<AssetDto>,
    pub hangar_containers: Vec<ContainerDto>,
    pub deliveries: Vec<AssetDto>,
    pub asset_safety: Vec<AssetDto>,
    pub corporation_hangars: Vec<CorporationHangarDto>,
}

/// Full asset tree for a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AssetTreeDto {
    pub stations: Vec<StationNodeDto>,
}

/// One stockpile shortfall, valued at the current buy price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeficitDto {
    pub name: String,
    pub type_id: i64,
    /// Quantity currently held for this key.
    pub quantity: i64,
    pub volume: f64,
    pub owner_kind: String,
    pub owner_name: String,
    pub owner_id: i64,
    pub desired_quantity: i64,
    /// held - desired; always negative for an emitted row.
    pub delta: i64,
    /// |delta| x buy price, 0 when no buy price is known.
    pub deficit_value: f64,
    pub structure_name: String,
    pub solar_system: String,
    pub region: String,
    pub container_name: Option<String>,
    pub division_number: Option<i16>,
}

/// Flat deficit list, ordered by deficit value descending.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeficitListDto {
    pub items: Vec<DeficitDto>,
}

/// Aggregate totals across all held assets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AssetSummaryDto {
    /// Sum of quantity x sell price over every held item.
    pub total_value: f64,
    /// Sum of positive deficit values over every matched target.
    pub total_deficit: f64,
}
