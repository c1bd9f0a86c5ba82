//! Point-in-time snapshot of every store the aggregation engine reads.

use std::collections::{HashMap, HashSet};

use sea_orm::ConnectionTrait;

use crate::{
    data::{
        asset::AssetFactRepository, catalog::CatalogRepository, market::MarketPriceRepository,
        stockpile::StockpileTargetRepository,
    },
    error::asset::AssetError,
    model::asset::{
        AssetFact, DivisionCatalog, ItemType, LocationKind, MarketQuote, OwnerKind, StationInfo,
        StockpileTarget, TargetKey,
    },
};

/// One consistent read of facts, catalogs, targets, and prices for a user.
///
/// The snapshot is the only input to the resolver, tree builder, and deficit
/// calculator; the whole aggregation is a pure computation over it, so
/// concurrent requests never share mutable state.
pub struct AssetSnapshot {
    pub facts: Vec<AssetFact>,
    pub item_types: HashMap<i64, ItemType>,
    pub stations: HashMap<i64, StationInfo>,
    /// Player-assigned display names keyed by item id.
    pub item_names: HashMap<i64, String>,
    pub character_names: HashMap<i64, String>,
    pub corporation_names: HashMap<i64, String>,
    pub divisions: DivisionCatalog,
    pub targets: HashMap<TargetKey, i64>,
    pub quotes: HashMap<i64, MarketQuote>,
    /// Facts dropped at parse time (unknown owner kind, location kind, or flag).
    pub skipped_facts: usize,
}

impl AssetSnapshot {
    /// Bulk-reads every store for one user. Any failed read is fatal and
    /// names the store; unknown enum values in individual rows are not.
    pub async fn load<C: ConnectionTrait>(
        db: &C,
        user_id: i64,
        market_region_id: i64,
    ) -> Result<Self, AssetError> {
        let fact_repo = AssetFactRepository::new(db);
        let catalog_repo = CatalogRepository::new(db);
        let target_repo = StockpileTargetRepository::new(db);
        let price_repo = MarketPriceRepository::new(db);

        let fact_models = fact_repo
            .get_by_user(user_id)
            .await
            .map_err(AssetError::AssetFacts)?;

        let mut facts = Vec::with_capacity(fact_models.len());
        let mut skipped_facts = 0;
        for model in &fact_models {
            match AssetFact::from_model(model) {
                Some(fact) => facts.push(fact),
                None => skipped_facts += 1,
            }
        }

        let item_names: HashMap<i64, String> = fact_repo
            .get_names_by_user(user_id)
            .await
            .map_err(AssetError::AssetNames)?
            .into_iter()
            .collect();

        let mut targets: HashMap<TargetKey, i64> = HashMap::new();
        for model in target_repo
            .get_by_user(user_id)
            .await
            .map_err(AssetError::StockpileTargets)?
        {
            match StockpileTarget::from_model(&model) {
                Some(target) => {
                    targets.insert(target.key, target.desired_quantity);
                }
                None => skipped_facts += 1,
            }
        }

        // Targets are matched even when nothing is held, so the catalog and
        // quote reads must cover target keys as well as facts.
        let type_ids: Vec<i64> = facts
            .iter()
            .map(|f| f.type_id)
            .chain(targets.keys().map(|k| k.type_id))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let item_types: HashMap<i64, ItemType> = catalog_repo
            .get_item_types_by_ids(&type_ids)
            .await
            .map_err(AssetError::ItemTypes)?
            .into_iter()
            .map(|t| (t.type_id, t))
            .collect();

        // Every reachable root terminates at a station-kind fact, so the
        // station-kind location ids plus the target stations cover everything.
        let station_ids: Vec<i64> = facts
            .iter()
            .filter(|f| f.location_kind == LocationKind::Station)
            .map(|f| f.location_id)
            .chain(targets.keys().map(|k| k.location_id))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let stations: HashMap<i64, StationInfo> = catalog_repo
            .get_stations_by_ids(&station_ids)
            .await
            .map_err(AssetError::Stations)?
            .into_iter()
            .map(|s| (s.station_id, s))
            .collect();

        let mut character_ids: HashSet<i64> = HashSet::new();
        let mut corporation_ids: HashSet<i64> = HashSet::new();
        let owners = facts
            .iter()
            .map(|f| (f.owner_kind, f.owner_id))
            .chain(targets.keys().map(|k| (k.owner_kind, k.owner_id)));
        for (owner_kind, owner_id) in owners {
            match owner_kind {
                OwnerKind::Character => character_ids.insert(owner_id),
                OwnerKind::Corporation => corporation_ids.insert(owner_id),
            };
        }

        let character_ids: Vec<i64> = character_ids.into_iter().collect();
        let character_names: HashMap<i64, String> = catalog_repo
            .get_character_names_by_ids(&character_ids)
            .await
            .map_err(AssetError::Owners)?
            .into_iter()
            .collect();

        let corporation_ids: Vec<i64> = corporation_ids.into_iter().collect();
        let corporation_names: HashMap<i64, String> = catalog_repo
            .get_corporation_names_by_ids(&corporation_ids)
            .await
            .map_err(AssetError::Owners)?
            .into_iter()
            .collect();

        let mut divisions: DivisionCatalog = HashMap::new();
        for (corporation_id, number, name) in catalog_repo
            .get_hangar_divisions_by_user(user_id)
            .await
            .map_err(AssetError::Divisions)?
        {
            divisions
                .entry(corporation_id)
                .or_default()
                .push((number, name));
        }

        let quotes: HashMap<i64, MarketQuote> = price_repo
            .get_quotes_by_region(market_region_id, &type_ids)
            .await
            .map_err(AssetError::MarketPrices)?
            .into_iter()
            .collect();

        Ok(Self {
            facts,
            item_types,
            stations,
            item_names,
            character_names,
            corporation_names,
            divisions,
            targets,
            quotes,
            skipped_facts,
        })
    }

    /// Whether a fact is itself a container (singleton of a container type).
    pub fn is_container_fact(&self, fact: &AssetFact) -> bool {
        fact.is_singleton
            && self
                .item_types
                .get(&fact.type_id)
                .is_some_and(|t| t.is_container)
    }

    /// Owner display name, falling back to the raw id.
    pub fn owner_name(&self, owner_kind: OwnerKind, owner_id: i64) -> String {
        let names = match owner_kind {
            OwnerKind::Character => &self.character_names,
            OwnerKind::Corporation => &self.corporation_names,
        };

        names
            .get(&owner_id)
            .cloned()
            .unwrap_or_else(|| owner_id.to_string())
    }

    /// Display name for a container: the player-assigned name when present,
    /// otherwise the type name.
    pub fn container_name(&self, item_id: i64, type_id: i64) -> String {
        if let Some(name) = self.item_names.get(&item_id) {
            return name.clone();
        }

        self.item_types
            .get(&type_id)
            .map(|t| t.name.clone())
            .unwrap_or_default()
    }
}
