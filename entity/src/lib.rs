pub mod asset_fact;
pub mod asset_item_type;
pub mod asset_location_name;
pub mod constellation;
pub mod corporation_division;
pub mod eve_character;
pub mod eve_corporation;
pub mod market_price;
pub mod region;
pub mod solar_system;
pub mod station;
pub mod stockpile_target;

pub mod prelude;
