mod resolver;
mod service;

use crate::model::asset::{
    AssetFact, ItemType, LocationFlag, LocationKind, MarketQuote, OwnerKind, StationInfo, TargetKey,
};

use super::snapshot::AssetSnapshot;

pub const USER_ID: i64 = 1;
pub const CHARACTER_ID: i64 = 2114794365;
pub const CORPORATION_ID: i64 = 98784257;
pub const JITA_STATION_ID: i64 = 60003760;
pub const AMARR_STATION_ID: i64 = 60008494;
pub const TRITANIUM: i64 = 34;
pub const PYERITE: i64 = 35;
pub const STATION_CONTAINER: i64 = 3467;
pub const OFFICE: i64 = 27;

/// In-memory snapshot builder for pure engine tests. Mirrors what the
/// snapshot loader would produce from the database without touching one.
pub struct SnapshotBuilder {
    snapshot: AssetSnapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        let mut builder = Self {
            snapshot: AssetSnapshot {
                facts: Vec::new(),
                item_types: Default::default(),
                stations: Default::default(),
                item_names: Default::default(),
                character_names: Default::default(),
                corporation_names: Default::default(),
                divisions: Default::default(),
                targets: Default::default(),
                quotes: Default::default(),
                skipped_facts: 0,
            },
        };

        builder = builder
            .station(JITA_STATION_ID, "Jita IV - Moon 4", "Jita", "The Forge")
            .station(AMARR_STATION_ID, "Amarr VIII (Oris)", "Amarr", "Domain")
            .item_type(TRITANIUM, "Tritanium", 0.01, false)
            .item_type(PYERITE, "Pyerite", 0.01, false)
            .item_type(STATION_CONTAINER, "Station Container", 10_000.0, true)
            .item_type(OFFICE, "Office", 0.0, false)
            .character(CHARACTER_ID, "Test Pilot")
            .corporation(CORPORATION_ID, "Test Corp");

        builder
    }

    pub fn station(mut self, id: i64, name: &str, solar_system: &str, region: &str) -> Self {
        self.snapshot.stations.insert(
            id,
            StationInfo {
                station_id: id,
                name: name.to_string(),
                solar_system: solar_system.to_string(),
                region: region.to_string(),
            },
        );
        self
    }

    pub fn item_type(mut self, id: i64, name: &str, volume: f64, is_container: bool) -> Self {
        self.snapshot.item_types.insert(
            id,
            ItemType {
                type_id: id,
                name: name.to_string(),
                volume,
                is_container,
            },
        );
        self
    }

    pub fn character(mut self, id: i64, name: &str) -> Self {
        self.snapshot.character_names.insert(id, name.to_string());
        self
    }

    pub fn corporation(mut self, id: i64, name: &str) -> Self {
        self.snapshot.corporation_names.insert(id, name.to_string());
        self
    }

    pub fn division(mut self, corporation_id: i64, number: i16, name: &str) -> Self {
        self.snapshot
            .divisions
            .entry(corporation_id)
            .or_default()
            .push((number, name.to_string()));
        self
    }

    pub fn fact(mut self, fact: AssetFact) -> Self {
        self.snapshot.facts.push(fact);
        self
    }

    pub fn item_name(mut self, item_id: i64, name: &str) -> Self {
        self.snapshot.item_names.insert(item_id, name.to_string());
        self
    }

    pub fn target(mut self, key: TargetKey, desired_quantity: i64) -> Self {
        self.snapshot.targets.insert(key, desired_quantity);
        self
    }

    pub fn quote(mut self, type_id: i64, buy_price: Option<f64>, sell_price: Option<f64>) -> Self {
        self.snapshot.quotes.insert(
            type_id,
            MarketQuote {
                buy_price,
                sell_price,
            },
        );
        self
    }

    pub fn build(self) -> AssetSnapshot {
        self.snapshot
    }
}

/// Stackable (non-singleton) fact.
pub fn fact(
    owner_kind: OwnerKind,
    owner_id: i64,
    item_id: i64,
    type_id: i64,
    quantity: i64,
    location_id: i64,
    location_kind: LocationKind,
    location_flag: LocationFlag,
) -> AssetFact {
    AssetFact {
        owner_kind,
        owner_id,
        item_id,
        type_id,
        quantity,
        is_singleton: false,
        location_id,
        location_kind,
        location_flag,
    }
}

/// Singleton fact; combined with a container type this is a container.
pub fn singleton_fact(
    owner_kind: OwnerKind,
    owner_id: i64,
    item_id: i64,
    type_id: i64,
    location_id: i64,
    location_kind: LocationKind,
    location_flag: LocationFlag,
) -> AssetFact {
    AssetFact {
        owner_kind,
        owner_id,
        item_id,
        type_id,
        quantity: 1,
        is_singleton: true,
        location_id,
        location_kind,
        location_flag,
    }
}
