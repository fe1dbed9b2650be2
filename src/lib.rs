//! Huebox - color palette session service
//!
//! HTTP service around the `color-harmony` crate: per-session working
//! palettes with locking, reordering and a saved-palette collection.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
