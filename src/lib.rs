//! tunestore library
//!
//! In-memory music catalog (artists, albums, songs) with reverse lookups,
//! served over HTTP/JSON.

pub mod catalog_store;
pub mod config;
pub mod server;

// Re-export commonly used types for convenience
pub use catalog_store::{CatalogStore, InMemoryCatalogStore};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
