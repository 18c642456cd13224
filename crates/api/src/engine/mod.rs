//! Audit execution engine.
//!
//! Bridges the pure detectors in `vendora_core::audit` to the database:
//! bulk-reads the catalog snapshot, runs a sweep, and appends each finding
//! to the audit log.

pub mod audit;
