//! Data access layer.
//!
//! Thin repositories over the sea-orm entities. Each repository borrows a
//! connection (or transaction) and owns the queries for one store; business
//! rules live in the service layer.

pub mod asset;
pub mod catalog;
pub mod market;
pub mod stockpile;

#[cfg(test)]
mod tests;
