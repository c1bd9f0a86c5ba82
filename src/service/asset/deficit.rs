//! Stockpile deficit calculation and portfolio summary totals.
//!
//! Both start from the same held-quantity index: every placed fact is folded
//! into a map keyed by the full target key (type, owner, station, container,
//! division). Deficits are target-driven: a target with no matching held
//! quantity is a deficit of the full desired amount, and held quantities with
//! no target never produce a row.

use std::collections::HashMap;

use crate::model::{
    asset::{LocationFlag, LocationKind, OwnerKind, TargetKey},
    dto::{AssetSummaryDto, DeficitDto, DeficitListDto},
};

use super::{resolver::ContainerResolution, snapshot::AssetSnapshot};

/// Deficit list plus the count of rows dropped as data inconsistencies.
pub struct DeficitOutcome {
    pub list: DeficitListDto,
    pub inconsistencies: usize,
}

/// Held quantities per target key, with the portfolio sell value accumulated
/// in the same pass.
struct HeldIndex {
    quantities: HashMap<TargetKey, i64>,
    total_value: f64,
    inconsistencies: usize,
}

fn build_held_index(snapshot: &AssetSnapshot, resolution: &ContainerResolution) -> HeldIndex {
    let mut quantities: HashMap<TargetKey, i64> = HashMap::new();
    let mut total_value = 0.0;
    let mut inconsistencies = 0;

    let mut add = |key: TargetKey, quantity: i64| {
        total_value += quantity as f64
            * snapshot
                .quotes
                .get(&key.type_id)
                .and_then(|q| q.sell_price)
                .unwrap_or(0.0);
        *quantities.entry(key).or_insert(0) += quantity;
    };

    for fact in &snapshot.facts {
        if snapshot.is_container_fact(fact) {
            // The container itself counts as held at its resolved station.
            match resolution.get(fact.item_id) {
                Some(resolved) => add(
                    TargetKey {
                        type_id: fact.type_id,
                        owner_kind: fact.owner_kind,
                        owner_id: fact.owner_id,
                        location_id: resolved.root_station_id,
                        container_id: None,
                        division_number: resolved.division_number,
                    },
                    fact.quantity,
                ),
                None => inconsistencies += 1,
            }
            continue;
        }

        match fact.location_kind {
            LocationKind::Station => match (fact.owner_kind, fact.location_flag) {
                (
                    OwnerKind::Character,
                    LocationFlag::Hangar
                    | LocationFlag::Unlocked
                    | LocationFlag::Deliveries
                    | LocationFlag::AssetSafety,
                ) => add(
                    TargetKey::station(fact.type_id, fact.owner_kind, fact.owner_id, fact.location_id),
                    fact.quantity,
                ),
                (OwnerKind::Corporation, LocationFlag::CorpDivision(number)) => add(
                    TargetKey {
                        type_id: fact.type_id,
                        owner_kind: fact.owner_kind,
                        owner_id: fact.owner_id,
                        location_id: fact.location_id,
                        container_id: None,
                        division_number: Some(number),
                    },
                    fact.quantity,
                ),
                (OwnerKind::Corporation, LocationFlag::OfficeFolder) => {}
                _ => inconsistencies += 1,
            },
            LocationKind::Item => match resolution.get(fact.location_id) {
                Some(container) => add(
                    TargetKey {
                        type_id: fact.type_id,
                        owner_kind: fact.owner_kind,
                        owner_id: fact.owner_id,
                        location_id: container.root_station_id,
                        container_id: Some(container.item_id),
                        division_number: container.division_number,
                    },
                    fact.quantity,
                ),
                None => inconsistencies += 1,
            },
        }
    }

    HeldIndex {
        quantities,
        total_value,
        inconsistencies,
    }
}

/// Computes the deficit row for every target whose held quantity falls short.
pub fn build_deficits(snapshot: &AssetSnapshot, resolution: &ContainerResolution) -> DeficitOutcome {
    let held = build_held_index(snapshot, resolution);
    let mut inconsistencies = held.inconsistencies;
    let mut items = Vec::new();

    // Container type ids for display-name fallback, covering containers whose
    // chain no longer resolves.
    let container_types: HashMap<i64, i64> = snapshot
        .facts
        .iter()
        .filter(|f| snapshot.is_container_fact(f))
        .map(|f| (f.item_id, f.type_id))
        .collect();

    for (key, desired) in &snapshot.targets {
        let held_quantity = held.quantities.get(key).copied().unwrap_or(0);
        let delta = held_quantity - desired;
        if delta >= 0 {
            continue;
        }

        let Some(item_type) = snapshot.item_types.get(&key.type_id) else {
            inconsistencies += 1;
            continue;
        };
        let Some(station) = snapshot.stations.get(&key.location_id) else {
            inconsistencies += 1;
            continue;
        };

        let buy_price = snapshot
            .quotes
            .get(&key.type_id)
            .and_then(|q| q.buy_price)
            .unwrap_or(0.0);

        let container_name = key.container_id.map(|container_id| {
            let type_id = resolution
                .get(container_id)
                .map(|resolved| resolved.type_id)
                .or_else(|| container_types.get(&container_id).copied());
            match type_id {
                Some(type_id) => snapshot.container_name(container_id, type_id),
                None => snapshot
                    .item_names
                    .get(&container_id)
                    .cloned()
                    .unwrap_or_default(),
            }
        });

        items.push(DeficitDto {
            name: item_type.name.clone(),
            type_id: key.type_id,
            quantity: held_quantity,
            volume: item_type.volume * held_quantity as f64,
            owner_kind: key.owner_kind.as_str().to_string(),
            owner_name: snapshot.owner_name(key.owner_kind, key.owner_id),
            owner_id: key.owner_id,
            desired_quantity: *desired,
            delta,
            deficit_value: (-delta) as f64 * buy_price,
            structure_name: station.name.clone(),
            solar_system: station.solar_system.clone(),
            region: station.region.clone(),
            container_name,
            division_number: key.division_number,
        });
    }

    items.sort_by(|a, b| {
        b.deficit_value
            .total_cmp(&a.deficit_value)
            .then_with(|| a.structure_name.cmp(&b.structure_name))
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.type_id.cmp(&b.type_id))
    });

    DeficitOutcome {
        list: DeficitListDto { items },
        inconsistencies,
    }
}

/// Portfolio totals: everything held valued at sell, every shortfall valued
/// at buy.
pub fn build_summary(snapshot: &AssetSnapshot, resolution: &ContainerResolution) -> AssetSummaryDto {
    let held = build_held_index(snapshot, resolution);

    let mut total_deficit = 0.0;
    for (key, desired) in &snapshot.targets {
        let held_quantity = held.quantities.get(key).copied().unwrap_or(0);
        let shortfall = desired - held_quantity;
        if shortfall <= 0 {
            continue;
        }

        let buy_price = snapshot
            .quotes
            .get(&key.type_id)
            .and_then(|q| q.buy_price)
            .unwrap_or(0.0);
        total_deficit += shortfall as f64 * buy_price;
    }

    AssetSummaryDto {
        total_value: held.total_value,
        total_deficit,
    }
}
