//! Storage layer for scraped game logs
//!
//! This module wraps the SQLite database, organized into logical components:
//! - `models`: Table descriptions and roster data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Roster, load-status and fact-table operations
//! - `delta`: Anti-join of fresh rows against stored rows

pub mod delta;
pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use delta::anti_join;
pub use models::*;
pub use queries::PlayerLoad;
pub use schema::PlayerDatabase;
