//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Conversions into the `vendora-core` snapshot/config types

pub mod audit;
pub mod catalog;
pub mod standardization;
