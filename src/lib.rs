//! Quartermaster server library.
//!
//! Tracks character- and corporation-owned EVE Online assets across stations,
//! corporate hangar divisions, and nested containers, and reconciles held
//! quantities against user-declared stockpile targets priced with market data.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
