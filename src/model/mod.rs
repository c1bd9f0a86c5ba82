//! Server models and type definitions.
//!
//! Contains the application state, API DTOs, session data structures, and the
//! domain types the asset aggregation engine operates on.

pub mod api;
pub mod app;
pub mod asset;
pub mod dto;
pub mod session;
