//! RealConnect event networking core
//!
//! Hosts create events with join codes, attendees browse each other's
//! profiles behind a per-event visibility filter, and rule-based
//! recommenders suggest events and people from shared interests, location
//! and education. This library holds the matching, recommendation,
//! visibility and connection logic together with its Postgres-backed
//! profile store; the HTTP surface lives outside.

pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{RealConnectError, Result};

// Re-export main components for easy access
pub use database::{DatabaseService, ProfileStore};
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
