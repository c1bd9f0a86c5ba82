//! Domain types for one asset aggregation pass.
//!
//! These are parsed, typed views over the raw ingestion rows. Rows carrying a
//! kind or flag the parser does not recognize are dropped by the snapshot
//! loader and counted, never treated as fatal — catalog drift from new game
//! content must not take the feature down.

use std::collections::HashMap;

/// Flag prefix EVE uses for corporation hangar divisions (`CorpSAG1`..`CorpSAG7`).
pub const CORP_DIVISION_FLAG_PREFIX: &str = "CorpSAG";

/// Whether an asset belongs to a character or a corporation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OwnerKind {
    Character,
    Corporation,
}

impl OwnerKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "character" => Some(Self::Character),
            "corporation" => Some(Self::Corporation),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Corporation => "corporation",
        }
    }
}

/// Whether a fact sits directly at a station or inside another item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationKind {
    Station,
    Item,
}

impl LocationKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "station" => Some(Self::Station),
            "item" => Some(Self::Item),
            _ => None,
        }
    }
}

/// Parsed location flag of an asset fact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationFlag {
    Hangar,
    /// Loose inside an unlocked container slot; bucketed with the hangar.
    Unlocked,
    Deliveries,
    AssetSafety,
    OfficeFolder,
    /// Corporation hangar division, numbered 1..=7.
    CorpDivision(i16),
}

impl LocationFlag {
    pub fn parse(value: &str) -> Option<Self> {
        if let Some(suffix) = value.strip_prefix(CORP_DIVISION_FLAG_PREFIX) {
            return suffix.parse::<i16>().ok().map(Self::CorpDivision);
        }

        match value {
            "Hangar" => Some(Self::Hangar),
            "Unlocked" => Some(Self::Unlocked),
            "Deliveries" => Some(Self::Deliveries),
            "AssetSafety" => Some(Self::AssetSafety),
            "OfficeFolder" => Some(Self::OfficeFolder),
            _ => None,
        }
    }

    /// Division number when this is a corp division flag.
    pub fn division_number(&self) -> Option<i16> {
        match self {
            Self::CorpDivision(n) => Some(*n),
            _ => None,
        }
    }
}

/// One parsed inventory fact. `item_id` anchors facts nested inside this item.
#[derive(Clone, Debug)]
pub struct AssetFact {
    pub owner_kind: OwnerKind,
    pub owner_id: i64,
    pub item_id: i64,
    pub type_id: i64,
    pub quantity: i64,
    pub is_singleton: bool,
    pub location_id: i64,
    pub location_kind: LocationKind,
    pub location_flag: LocationFlag,
}

impl AssetFact {
    /// Parses a raw ingestion row; `None` when the owner kind, location kind,
    /// or location flag is unknown.
    pub fn from_model(model: &entity::asset_fact::Model) -> Option<Self> {
        Some(Self {
            owner_kind: OwnerKind::parse(&model.owner_kind)?,
            owner_id: model.owner_id,
            item_id: model.item_id,
            type_id: model.type_id,
            quantity: model.quantity,
            is_singleton: model.is_singleton,
            location_id: model.location_id,
            location_kind: LocationKind::parse(&model.location_kind)?,
            location_flag: LocationFlag::parse(&model.location_flag)?,
        })
    }
}

/// Item type catalog entry.
#[derive(Clone, Debug)]
pub struct ItemType {
    pub type_id: i64,
    pub name: String,
    pub volume: f64,
    pub is_container: bool,
}

/// Station joined with its solar system and region names.
#[derive(Clone, Debug)]
pub struct StationInfo {
    pub station_id: i64,
    pub name: String,
    pub solar_system: String,
    pub region: String,
}

/// Latest buy/sell quotes for one item type in the configured trading hub.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarketQuote {
    pub buy_price: Option<f64>,
    pub sell_price: Option<f64>,
}

/// Full natural key of a stockpile target. Matching is exact on the whole
/// tuple; `container_id` and `division_number` must both be `None` to match
/// an asset sitting loose at a station.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TargetKey {
    pub type_id: i64,
    pub owner_kind: OwnerKind,
    pub owner_id: i64,
    pub location_id: i64,
    pub container_id: Option<i64>,
    pub division_number: Option<i16>,
}

impl TargetKey {
    /// Key for an asset sitting loose at a station (no container, no division).
    pub fn station(type_id: i64, owner_kind: OwnerKind, owner_id: i64, location_id: i64) -> Self {
        Self {
            type_id,
            owner_kind,
            owner_id,
            location_id,
            container_id: None,
            division_number: None,
        }
    }
}

/// User-declared desired stockpile quantity.
#[derive(Clone, Debug)]
pub struct StockpileTarget {
    pub key: TargetKey,
    pub desired_quantity: i64,
}

impl StockpileTarget {
    /// Parses a stored target row; `None` when the owner kind is unknown.
    pub fn from_model(model: &entity::stockpile_target::Model) -> Option<Self> {
        Some(Self {
            key: TargetKey {
                type_id: model.type_id,
                owner_kind: OwnerKind::parse(&model.owner_kind)?,
                owner_id: model.owner_id,
                location_id: model.location_id,
                container_id: model.container_id,
                division_number: model.division_number,
            },
            desired_quantity: model.desired_quantity,
        })
    }
}

/// Corp-wide hangar division definitions: corporation id → number → name.
pub type DivisionCatalog = HashMap<i64, Vec<(i16, String)>>;
