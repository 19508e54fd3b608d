//! healio-common — Shared error types used across all Healio crates.

pub mod error;

// Re-export commonly used types
pub use error::{ApiError, HealioError, Result};
