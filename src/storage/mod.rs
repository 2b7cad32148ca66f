//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with one table:
//! - cars(id, brand, price) with non-unique secondary indexes on brand and price

pub mod schema;
pub mod sqlite;

pub use sqlite::CatalogStore;
