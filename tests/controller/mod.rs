//! Endpoint integration tests.
//!
//! Handlers are invoked directly with a test state and an in-memory session,
//! matching how the router wires them at runtime.

mod asset;
mod stockpile;

use quartermaster::{config::DEFAULT_MARKET_REGION_ID, model::app::AppState};
use quartermaster_test_utils::TestSetup;

pub fn app_state(test: &TestSetup) -> AppState {
    AppState {
        db: test.state.db.clone(),
        market_region_id: DEFAULT_MARKET_REGION_ID,
    }
}
