//! Business logic services.
//!
//! Services coordinate between repositories and own the asset aggregation
//! engine; controllers stay thin and repositories stay query-only.

pub mod asset;
