//! # Domain Models
//!
//! Pure types for the mesh site: configuration, nodes, members and derived stats.
//! Keep it lean: `serde` and `serde_json` only, no I/O or networking.

pub mod config;
pub mod constants;
pub mod models;
pub mod registry;
