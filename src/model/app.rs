use sea_orm::DatabaseConnection;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,
    /// Region whose market prices value assets and deficits.
    pub market_region_id: i64,
}
