//! # Carlot - Local car-listings catalog
//!
//! A single-table catalog of car listings (brand, price) backed by SQLite.
//!
//! Carlot provides:
//! - `CatalogStore`, a storage gateway whose mutations each run in their own
//!   read-write transaction
//! - A record lifecycle: validated create, field-level update, delete with
//!   interactive confirmation
//! - Terminal table rendering with thousands-grouped price display
//!
//! Every mutating command re-fetches the full record set and re-renders the
//! table once its transaction has committed.

pub mod commands;
pub mod config;
pub mod format;
pub mod record;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use record::{Field, NewListing, Record};
pub use storage::CatalogStore;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid listing: {0}")]
    InvalidListing(String),

    #[error("Unknown field: {0} (expected 'brand' or 'price')")]
    InvalidField(String),
}
