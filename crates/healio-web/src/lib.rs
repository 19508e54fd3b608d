//! healio-web — Web GUI for Healio
//! Provides the analysis platform with:
//!   - Landing page and PharmAI hub
//!   - Drug–excipient compatibility checker
//!   - Molecular structure viewer with JSON export
//!   - JSON API mirroring every page

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
