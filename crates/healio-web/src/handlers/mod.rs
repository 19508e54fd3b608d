//! HTTP handlers for all web routes.

pub mod compatibility;
pub mod home;
pub mod molecules;
