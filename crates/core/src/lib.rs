//! Pure domain logic for vendor data standardization and catalog auditing.
//!
//! This crate has no database or I/O dependencies. The API layer loads
//! configuration snapshots and catalog data through `vendora-db` and feeds
//! them into the pure functions defined here.

pub mod audit;
pub mod compliance;
pub mod error;
pub mod import;
pub mod mapping;
pub mod normalize;
pub mod transform;
pub mod types;
