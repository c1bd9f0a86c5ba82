use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::asset::{ItemType, StationInfo};

/// Read-only reference data: item types, the station/system/region chain,
/// owner display names, and the corp hangar division catalog.
pub struct CatalogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_item_types_by_ids(
        &self,
        type_ids: &[i64],
    ) -> Result<Vec<ItemType>, DbErr> {
        let models = entity::prelude::AssetItemType::find()
            .filter(entity::asset_item_type::Column::TypeId.is_in(type_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(models
            .into_iter()
            .map(|m| ItemType {
                type_id: m.type_id,
                name: m.name,
                volume: m.volume,
                is_container: m.is_container,
            })
            .collect())
    }

    /// Stations joined with their solar system and region names.
    ///
    /// The map chain is stitched in memory from the four catalog tables;
    /// stations whose chain is incomplete are omitted rather than erroring.
    pub async fn get_stations_by_ids(
        &self,
        station_ids: &[i64],
    ) -> Result<Vec<StationInfo>, DbErr> {
        let stations = entity::prelude::Station::find()
            .filter(entity::station::Column::StationId.is_in(station_ids.iter().copied()))
            .all(self.db)
            .await?;

        let system_ids: Vec<i64> = stations.iter().map(|s| s.solar_system_id).collect();
        let systems: HashMap<i64, entity::solar_system::Model> =
            entity::prelude::SolarSystem::find()
                .filter(
                    entity::solar_system::Column::SolarSystemId.is_in(system_ids.iter().copied()),
                )
                .all(self.db)
                .await?
                .into_iter()
                .map(|s| (s.solar_system_id, s))
                .collect();

        let constellation_ids: Vec<i64> =
            systems.values().map(|s| s.constellation_id).collect();
        let constellations: HashMap<i64, entity::constellation::Model> =
            entity::prelude::Constellation::find()
                .filter(
                    entity::constellation::Column::ConstellationId
                        .is_in(constellation_ids.iter().copied()),
                )
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.constellation_id, c))
                .collect();

        let region_ids: Vec<i64> = constellations.values().map(|c| c.region_id).collect();
        let regions: HashMap<i64, String> = entity::prelude::Region::find()
            .filter(entity::region::Column::RegionId.is_in(region_ids.iter().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| (r.region_id, r.name))
            .collect();

        Ok(stations
            .into_iter()
            .filter_map(|station| {
                let system = systems.get(&station.solar_system_id)?;
                let constellation = constellations.get(&system.constellation_id)?;
                let region = regions.get(&constellation.region_id)?;

                Some(StationInfo {
                    station_id: station.station_id,
                    name: station.name,
                    solar_system: system.name.clone(),
                    region: region.clone(),
                })
            })
            .collect())
    }

    pub async fn get_character_names_by_ids(
        &self,
        character_ids: &[i64],
    ) -> Result<Vec<(i64, String)>, DbErr> {
        entity::prelude::EveCharacter::find()
            .select_only()
            .column(entity::eve_character::Column::CharacterId)
            .column(entity::eve_character::Column::Name)
            .filter(
                entity::eve_character::Column::CharacterId.is_in(character_ids.iter().copied()),
            )
            .into_tuple::<(i64, String)>()
            .all(self.db)
            .await
    }

    pub async fn get_corporation_names_by_ids(
        &self,
        corporation_ids: &[i64],
    ) -> Result<Vec<(i64, String)>, DbErr> {
        entity::prelude::EveCorporation::find()
            .select_only()
            .column(entity::eve_corporation::Column::CorporationId)
            .column(entity::eve_corporation::Column::Name)
            .filter(
                entity::eve_corporation::Column::CorporationId
                    .is_in(corporation_ids.iter().copied()),
            )
            .into_tuple::<(i64, String)>()
            .all(self.db)
            .await
    }

    /// Hangar-class division definitions for every corporation the user can
    /// see. Wallet divisions are a distinct catalog and excluded here.
    pub async fn get_hangar_divisions_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<(i64, i16, String)>, DbErr> {
        entity::prelude::CorporationDivision::find()
            .select_only()
            .column(entity::corporation_division::Column::CorporationId)
            .column(entity::corporation_division::Column::DivisionNumber)
            .column(entity::corporation_division::Column::Name)
            .filter(entity::corporation_division::Column::UserId.eq(user_id))
            .filter(entity::corporation_division::Column::Kind.eq("hangar"))
            .order_by_asc(entity::corporation_division::Column::CorporationId)
            .order_by_asc(entity::corporation_division::Column::DivisionNumber)
            .into_tuple::<(i64, i16, String)>()
            .all(self.db)
            .await
    }
}
