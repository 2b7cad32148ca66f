//! SQLite storage implementation

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};
use tracing::debug;

use super::schema;
use crate::Result;
use crate::record::{Field, NewListing, Record};

/// SQLite-backed store for the car catalog.
///
/// Owns the single connection for its lifetime; each mutating operation runs
/// in its own read-write transaction, and callers re-render only after the
/// operation returns.
pub struct CatalogStore {
    conn: Connection,
}

impl CatalogStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Idempotent schema setup: the cars table plus its secondary indexes.
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// All records, in id order.
    pub fn list_all(&self) -> Result<Vec<Record>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, brand, price FROM cars ORDER BY id")?;

        let records = stmt
            .query_map([], row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }

    /// Get a record by id
    pub fn get(&self, id: i64) -> Result<Option<Record>> {
        self.conn
            .query_row(
                "SELECT id, brand, price FROM cars WHERE id = ?1",
                [id],
                row_to_record,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Insert a validated listing; the store assigns the id.
    pub fn create(&mut self, listing: &NewListing) -> Result<Record> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO cars (brand, price) VALUES (?1, ?2)",
            params![listing.brand, listing.price],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        debug!(id, brand = %listing.brand, "listing created");
        Ok(Record {
            id,
            brand: listing.brand.clone(),
            price: listing.price.clone(),
        })
    }

    /// Read the record, set one field, write the full row back.
    ///
    /// Returns `false` without writing when no record has this id.
    pub fn update_field(&mut self, id: i64, field: Field, value: &str) -> Result<bool> {
        let tx = self.conn.transaction()?;

        let existing = tx
            .query_row(
                "SELECT id, brand, price FROM cars WHERE id = ?1",
                [id],
                row_to_record,
            )
            .optional()?;

        let Some(mut record) = existing else {
            debug!(id, "update skipped, no such record");
            return Ok(false);
        };

        match field {
            Field::Brand => record.brand = value.to_string(),
            Field::Price => record.price = value.to_string(),
        }

        tx.execute(
            "UPDATE cars SET brand = ?1, price = ?2 WHERE id = ?3",
            params![record.brand, record.price, record.id],
        )?;
        tx.commit()?;

        debug!(id, field = field.as_str(), "listing updated");
        Ok(true)
    }

    /// Delete a record by id. Returns `false` when nothing matched.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let tx = self.conn.transaction()?;
        let affected = tx.execute("DELETE FROM cars WHERE id = ?1", [id])?;
        tx.commit()?;

        debug!(id, affected, "listing deleted");
        Ok(affected > 0)
    }

    /// Count all records
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM cars", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Helper to convert a row to a Record
fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<Record> {
    Ok(Record {
        id: row.get(0)?,
        brand: row.get(1)?,
        price: row.get(2)?,
    })
}
