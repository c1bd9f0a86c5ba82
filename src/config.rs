//! Environment-backed application configuration.

use crate::error::config::ConfigError;

/// The Forge (Jita), the default trading hub used for price lookups.
pub const DEFAULT_MARKET_REGION_ID: i64 = 10000002;

/// Runtime configuration sourced from environment variables.
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,
    /// Valkey/Redis connection string for the session store.
    pub valkey_url: String,
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    /// Region whose market prices value assets and deficits.
    pub market_region_id: i64,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// `DATABASE_URL` and `VALKEY_URL` are required; `LISTEN_ADDR` defaults to
    /// `0.0.0.0:8080` and `MARKET_REGION_ID` to The Forge.
    pub fn from_env() -> Result<Self, ConfigError> {
        let market_region_id = match std::env::var("MARKET_REGION_ID") {
            Ok(value) => value
                .parse::<i64>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "MARKET_REGION_ID".to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_MARKET_REGION_ID,
        };

        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            valkey_url: require_env("VALKEY_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            market_region_id,
        })
    }
}

fn require_env(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
