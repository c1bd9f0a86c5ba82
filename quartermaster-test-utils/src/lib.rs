pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::{market_price_type_region_index, TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        fixtures::factory, market_price_type_region_index, test_setup_with_asset_tables,
        test_setup_with_tables, TestError, TestSetup,
    };
}
