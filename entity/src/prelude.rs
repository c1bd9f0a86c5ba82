pub use super::asset_fact::Entity as AssetFact;
pub use super::asset_item_type::Entity as AssetItemType;
pub use super::asset_location_name::Entity as AssetLocationName;
pub use super::constellation::Entity as Constellation;
pub use super::corporation_division::Entity as CorporationDivision;
pub use super::eve_character::Entity as EveCharacter;
pub use super::eve_corporation::Entity as EveCorporation;
pub use super::market_price::Entity as MarketPrice;
pub use super::region::Entity as Region;
pub use super::solar_system::Entity as SolarSystem;
pub use super::station::Entity as Station;
pub use super::stockpile_target::Entity as StockpileTarget;
