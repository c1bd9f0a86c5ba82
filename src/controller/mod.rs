//! HTTP request handlers.
//!
//! Controllers stay thin: resolve the session user, delegate to the asset
//! service, and map the result to a response. Anyone without a session gets
//! a 401 before any store is touched.

pub mod asset;
pub mod stockpile;
