//! Assembles resolved facts into the station → hangar/division → container tree.
//!
//! All intermediate state (station map, presence set, division buckets) is
//! local to one invocation; nothing is shared across requests. Division
//! definitions are corp-wide templates and are materialized as a fresh node
//! per station, so an empty division at one station never aliases the same
//! division holding assets at another.

use std::collections::{HashMap, HashSet};

use crate::model::{
    asset::{AssetFact, LocationFlag, LocationKind, OwnerKind},
    dto::{AssetDto, AssetTreeDto, ContainerDto, CorporationHangarDto, StationNodeDto},
};

use super::{resolver::ContainerResolution, snapshot::AssetSnapshot};

/// Tree plus the count of facts dropped as data inconsistencies.
pub struct TreeOutcome {
    pub tree: AssetTreeDto,
    pub inconsistencies: usize,
}

/// Builds the full station tree for one snapshot.
pub fn build_tree(snapshot: &AssetSnapshot, resolution: &ContainerResolution) -> TreeOutcome {
    let mut builder = TreeBuilder::new(snapshot);

    // Direct items inside containers, grouped by their parent container.
    let mut children_by_parent: HashMap<i64, Vec<&AssetFact>> = HashMap::new();
    for fact in &snapshot.facts {
        if fact.location_kind == LocationKind::Item && !snapshot.is_container_fact(fact) {
            children_by_parent
                .entry(fact.location_id)
                .or_default()
                .push(fact);
        }
    }

    builder.place_station_facts();
    builder.place_containers(resolution, &mut children_by_parent);
    builder.materialize_divisions();

    // Whatever is left never found a station: children of orphaned
    // containers, or items nested in something that is not a container.
    builder.inconsistencies += children_by_parent.values().map(Vec::len).sum::<usize>();

    TreeOutcome {
        tree: builder.finish(),
        inconsistencies: builder.inconsistencies,
    }
}

type DivisionKey = (i64, i64, i16); // (station_id, corporation_id, division_number)

struct TreeBuilder<'a> {
    snapshot: &'a AssetSnapshot,
    stations: HashMap<i64, StationNodeDto>,
    /// (station, corporation) pairs with any corp presence.
    presence: HashSet<(i64, i64)>,
    division_assets: HashMap<DivisionKey, Vec<AssetDto>>,
    division_containers: HashMap<DivisionKey, Vec<ContainerDto>>,
    inconsistencies: usize,
}

impl<'a> TreeBuilder<'a> {
    fn new(snapshot: &'a AssetSnapshot) -> Self {
        Self {
            snapshot,
            stations: HashMap::new(),
            presence: HashSet::new(),
            division_assets: HashMap::new(),
            division_containers: HashMap::new(),
            inconsistencies: 0,
        }
    }

    /// Buckets every fact sitting directly at a station.
    fn place_station_facts(&mut self) {
        for fact in &self.snapshot.facts {
            if fact.location_kind != LocationKind::Station
                || self.snapshot.is_container_fact(fact)
            {
                // Containers are placed through their resolution instead.
                continue;
            }

            let station_id = fact.location_id;

            match (fact.owner_kind, fact.location_flag) {
                (OwnerKind::Character, LocationFlag::Hangar | LocationFlag::Unlocked) => {
                    self.push_personal(station_id, fact, PersonalBucket::Hangar);
                }
                (OwnerKind::Character, LocationFlag::Deliveries) => {
                    self.push_personal(station_id, fact, PersonalBucket::Deliveries);
                }
                (OwnerKind::Character, LocationFlag::AssetSafety) => {
                    self.push_personal(station_id, fact, PersonalBucket::AssetSafety);
                }
                (OwnerKind::Corporation, LocationFlag::CorpDivision(number)) => {
                    if let Some(asset) = self.make_asset(fact) {
                        self.division_assets
                            .entry((station_id, fact.owner_id, number))
                            .or_default()
                            .push(asset);
                        self.mark_presence(station_id, fact.owner_id);
                    }
                }
                (OwnerKind::Corporation, LocationFlag::OfficeFolder) => {
                    // The office item itself is organizational; it only
                    // establishes the corp's presence at the station.
                    self.mark_presence(station_id, fact.owner_id);
                }
                _ => {
                    tracing::debug!(
                        item_id = fact.item_id,
                        flag = ?fact.location_flag,
                        "unexpected location flag for station-level fact"
                    );
                    self.inconsistencies += 1;
                }
            }
        }
    }

    /// Attaches every resolved container under its one resolved bucket.
    fn place_containers(
        &mut self,
        resolution: &ContainerResolution,
        children_by_parent: &mut HashMap<i64, Vec<&AssetFact>>,
    ) {
        self.inconsistencies += resolution.orphaned;

        let mut resolved: Vec<_> = resolution.containers.values().collect();
        resolved.sort_by_key(|c| c.item_id);

        for container in resolved {
            let mut assets: Vec<AssetDto> = children_by_parent
                .remove(&container.item_id)
                .unwrap_or_default()
                .into_iter()
                .filter_map(|fact| self.make_asset(fact))
                .collect();
            sort_assets(&mut assets);

            let dto = ContainerDto {
                id: container.item_id,
                name: self
                    .snapshot
                    .container_name(container.item_id, container.type_id),
                owner_kind: container.owner_kind.as_str().to_string(),
                owner_name: self
                    .snapshot
                    .owner_name(container.owner_kind, container.owner_id),
                owner_id: container.owner_id,
                assets,
            };

            match (container.owner_kind, container.division_number) {
                (OwnerKind::Character, _) => {
                    if let Some(station) = self.ensure_station(container.root_station_id) {
                        station.hangar_containers.push(dto);
                    }
                }
                (OwnerKind::Corporation, Some(number)) => {
                    // Presence can be established by the container alone,
                    // even when the corp has nothing else at this station.
                    self.division_containers
                        .entry((container.root_station_id, container.owner_id, number))
                        .or_default()
                        .push(dto);
                    self.mark_presence(container.root_station_id, container.owner_id);
                }
                (OwnerKind::Corporation, None) => {
                    tracing::debug!(
                        item_id = container.item_id,
                        "corporation container resolved without a division"
                    );
                    self.inconsistencies += 1;
                }
            }
        }
    }

    /// Clones the corp-wide division template onto every station with
    /// presence, including divisions that hold nothing there.
    fn materialize_divisions(&mut self) {
        let mut presence: Vec<_> = self.presence.iter().copied().collect();
        presence.sort_unstable();

        for (station_id, corporation_id) in presence {
            if self.ensure_station(station_id).is_none() {
                continue;
            }

            let Some(templates) = self.snapshot.divisions.get(&corporation_id) else {
                // Corp presence without a division catalog entry.
                self.inconsistencies += 1;
                continue;
            };

            let corporation_name = self
                .snapshot
                .owner_name(OwnerKind::Corporation, corporation_id);

            let mut hangars = Vec::with_capacity(templates.len());
            for (number, name) in templates {
                let key = (station_id, corporation_id, *number);
                let mut assets = self.division_assets.remove(&key).unwrap_or_default();
                sort_assets(&mut assets);

                hangars.push(CorporationHangarDto {
                    division_number: *number,
                    name: name.clone(),
                    corporation_id,
                    corporation_name: corporation_name.clone(),
                    assets,
                    containers: self.division_containers.remove(&key).unwrap_or_default(),
                });
            }

            if let Some(station) = self.stations.get_mut(&station_id) {
                station.corporation_hangars.extend(hangars);
            }
        }

        // Facts tagged with a division number the corp never defined.
        self.inconsistencies += self.division_assets.values().map(Vec::len).sum::<usize>();
        self.inconsistencies += self
            .division_containers
            .values()
            .map(Vec::len)
            .sum::<usize>();
    }

    fn finish(&mut self) -> AssetTreeDto {
        let mut stations: Vec<StationNodeDto> = self.stations.drain().map(|(_, s)| s).collect();

        for station in &mut stations {
            sort_assets(&mut station.hangar_assets);
            sort_assets(&mut station.deliveries);
            sort_assets(&mut station.asset_safety);
            station.hangar_containers.sort_by_key(|c| c.id);
            station.corporation_hangars.sort_by(|a, b| {
                (&a.corporation_name, a.corporation_id, a.division_number).cmp(&(
                    &b.corporation_name,
                    b.corporation_id,
                    b.division_number,
                ))
            });
        }

        stations.sort_by(|a, b| (&a.name, a.id).cmp(&(&b.name, b.id)));

        AssetTreeDto { stations }
    }

    fn push_personal(&mut self, station_id: i64, fact: &AssetFact, bucket: PersonalBucket) {
        let Some(asset) = self.make_asset(fact) else {
            return;
        };

        if let Some(station) = self.ensure_station(station_id) {
            let target = match bucket {
                PersonalBucket::Hangar => &mut station.hangar_assets,
                PersonalBucket::Deliveries => &mut station.deliveries,
                PersonalBucket::AssetSafety => &mut station.asset_safety,
            };
            target.push(asset);
        }
    }

    fn mark_presence(&mut self, station_id: i64, corporation_id: i64) {
        self.presence.insert((station_id, corporation_id));
    }

    /// Station node for an id, created from the catalog on first use.
    /// `None` (counted) when the station is unknown to the catalog.
    fn ensure_station(&mut self, station_id: i64) -> Option<&mut StationNodeDto> {
        use std::collections::hash_map::Entry;

        match self.stations.entry(station_id) {
            Entry::Occupied(entry) => Some(entry.into_mut()),
            Entry::Vacant(entry) => match self.snapshot.stations.get(&station_id) {
                Some(info) => Some(entry.insert(StationNodeDto {
                    id: info.station_id,
                    name: info.name.clone(),
                    solar_system: info.solar_system.clone(),
                    region: info.region.clone(),
                    hangar_assets: Vec::new(),
                    hangar_containers: Vec::new(),
                    deliveries: Vec::new(),
                    asset_safety: Vec::new(),
                    corporation_hangars: Vec::new(),
                })),
                None => {
                    tracing::debug!(station_id, "station missing from catalog");
                    self.inconsistencies += 1;
                    None
                }
            },
        }
    }

    /// Maps a fact to an output row; `None` (counted) when its item type is
    /// missing from the catalog.
    fn make_asset(&mut self, fact: &AssetFact) -> Option<AssetDto> {
        let Some(item_type) = self.snapshot.item_types.get(&fact.type_id) else {
            self.inconsistencies += 1;
            return None;
        };

        Some(AssetDto {
            name: item_type.name.clone(),
            type_id: fact.type_id,
            quantity: fact.quantity,
            volume: item_type.volume * fact.quantity as f64,
            owner_kind: fact.owner_kind.as_str().to_string(),
            owner_name: self.snapshot.owner_name(fact.owner_kind, fact.owner_id),
            owner_id: fact.owner_id,
        })
    }
}

enum PersonalBucket {
    Hangar,
    Deliveries,
    AssetSafety,
}

fn sort_assets(assets: &mut [AssetDto]) {
    assets.sort_by(|a, b| (&a.name, a.type_id, a.owner_id).cmp(&(&b.name, b.type_id, b.owner_id)));
}
