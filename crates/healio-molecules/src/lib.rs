//! Healio Molecules - molecule display data, analysis stand-in, and export.
//!
//! This crate owns:
//! 1. The molecule/atom record model behind the structure viewer
//! 2. The injectable molecule source (fixture-backed by default)
//! 3. The `SmilesAnalyzer` seam (timed stand-in by default)
//! 4. JSON export assembly and the `ExportSink` collaborator

pub mod analyze;
pub mod export;
pub mod molecule;
pub mod source;

pub use healio_common::Result;
