//! Healio Compatibility - drug–excipient compatibility data and the
//! prediction seam.
//!
//! This crate owns:
//! 1. The record model for the compatibility table
//! 2. The injectable record source (fixture-backed by default)
//! 3. Free-text filtering and per-category summaries
//! 4. The `CompatibilityModel` seam with mock and HTTP backends

pub mod filter;
pub mod predictor;
pub mod records;
pub mod source;
pub mod summary;

pub use healio_common::Result;
