//! Container resolution: walking parent chains down to a station.
//!
//! Asset facts form a parent-pointer forest: a fact whose location kind is
//! `item` points at the `item_id` of another fact. Containers can nest to
//! arbitrary depth (container in container in office in station), so each
//! container is resolved with an explicit iterative walk bounded by the total
//! fact count. Chains that never reach a station — stale data or a cycle —
//! produce no resolution and are counted as orphans.

use std::collections::HashMap;

use crate::model::asset::{AssetFact, LocationKind, OwnerKind};

use super::snapshot::AssetSnapshot;

/// A container pinned to the station its parent chain terminates at.
#[derive(Clone, Debug)]
pub struct ResolvedContainer {
    pub item_id: i64,
    pub owner_kind: OwnerKind,
    pub owner_id: i64,
    pub type_id: i64,
    pub root_station_id: i64,
    /// Division of the nearest CorpSAG-tagged ancestor-or-self; only ever
    /// present for corporation-owned containers.
    pub division_number: Option<i16>,
}

/// Resolution result for one snapshot.
pub struct ContainerResolution {
    /// Resolved containers keyed by their item id.
    pub containers: HashMap<i64, ResolvedContainer>,
    /// Containers whose chain never reached a station.
    pub orphaned: usize,
}

impl ContainerResolution {
    pub fn get(&self, item_id: i64) -> Option<&ResolvedContainer> {
        self.containers.get(&item_id)
    }
}

/// Resolves every container fact in the snapshot to its root station.
pub fn resolve_containers(snapshot: &AssetSnapshot) -> ContainerResolution {
    let facts_by_item: HashMap<i64, &AssetFact> =
        snapshot.facts.iter().map(|f| (f.item_id, f)).collect();

    let mut containers = HashMap::new();
    let mut orphaned = 0;

    for fact in &snapshot.facts {
        if !snapshot.is_container_fact(fact) {
            continue;
        }

        match walk_to_station(fact, &facts_by_item, snapshot.facts.len()) {
            Some((root_station_id, division_number)) => {
                let division_number = match fact.owner_kind {
                    OwnerKind::Corporation => division_number,
                    OwnerKind::Character => None,
                };

                containers.insert(
                    fact.item_id,
                    ResolvedContainer {
                        item_id: fact.item_id,
                        owner_kind: fact.owner_kind,
                        owner_id: fact.owner_id,
                        type_id: fact.type_id,
                        root_station_id,
                        division_number,
                    },
                );
            }
            None => {
                tracing::debug!(
                    item_id = fact.item_id,
                    "container chain did not terminate at a station"
                );
                orphaned += 1;
            }
        }
    }

    ContainerResolution {
        containers,
        orphaned,
    }
}

/// Follows parent pointers from `start` until a station-kind fact terminates
/// the chain. The step budget is the total fact count, so cyclic or malformed
/// chains fall out as `None` instead of looping.
fn walk_to_station(
    start: &AssetFact,
    facts_by_item: &HashMap<i64, &AssetFact>,
    max_steps: usize,
) -> Option<(i64, Option<i16>)> {
    let mut current = start;
    let mut division: Option<i16> = None;

    for _ in 0..=max_steps {
        if division.is_none() {
            division = current.location_flag.division_number();
        }

        match current.location_kind {
            LocationKind::Station => return Some((current.location_id, division)),
            LocationKind::Item => {
                current = facts_by_item.get(&current.location_id).copied()?;
            }
        }
    }

    None
}
