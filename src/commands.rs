//! Command handlers.
//!
//! Each mutation commits its transaction, then re-fetches the full record set
//! and re-renders the table, mirroring the load -> mutate -> refresh cycle of
//! the catalog view.

use std::path::{Path, PathBuf};

use tracing::error;

use crate::config::{self, CarlotConfig};
use crate::format::strip_grouping;
use crate::record::{Field, NewListing};
use crate::storage::CatalogStore;
use crate::ui;
use crate::Error;

fn open_store(database: &Path) -> anyhow::Result<CatalogStore> {
    config::ensure_db_dir(database)?;
    CatalogStore::open(database).map_err(|e| {
        error!("failed to open catalog database {}: {e}", database.display());
        e.into()
    })
}

fn render(store: &CatalogStore) -> anyhow::Result<()> {
    let records = store.list_all()?;
    if records.is_empty() {
        println!("{}", ui::dim("(catalog is empty)"));
    } else {
        println!("{}", ui::catalog_table(&records));
    }
    Ok(())
}

pub fn run_list(database: PathBuf, json: bool) -> anyhow::Result<()> {
    let store = open_store(&database)?;
    if json {
        let records = store.list_all()?;
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        render(&store)?;
    }
    Ok(())
}

pub fn run_add(database: PathBuf, brand: &str, price: &str) -> anyhow::Result<()> {
    let listing = match NewListing::new(brand, price) {
        Ok(listing) => listing,
        Err(Error::InvalidListing(reason)) => {
            ui::warn(&format!("nothing added: {reason}"));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mut store = open_store(&database)?;
    let record = match store.create(&listing) {
        Ok(record) => record,
        Err(e) => {
            error!("create transaction failed: {e}");
            ui::error("could not add the listing");
            return Err(e.into());
        }
    };

    ui::success(&format!("added listing #{} ({})", record.id, record.brand));
    render(&store)
}

pub fn run_set(database: PathBuf, id: i64, field: &str, value: &str) -> anyhow::Result<()> {
    let field: Field = field.parse()?;

    // Price edits arrive grouped for display; strip before commit so the
    // stored value stays digits-only.
    let value = match field {
        Field::Price => {
            let stripped = strip_grouping(value);
            if stripped.is_empty() {
                ui::warn("nothing changed: price must be numeric");
                return Ok(());
            }
            stripped
        }
        Field::Brand => value.trim().to_string(),
    };

    let mut store = open_store(&database)?;
    if store.update_field(id, field, &value)? {
        ui::success("record updated");
    }
    render(&store)
}

pub fn run_delete(database: PathBuf, id: i64, yes: bool) -> anyhow::Result<()> {
    let confirmed = yes || ui::confirm(&format!("Really delete listing #{id}?"))?;
    if !confirmed {
        println!("{}", ui::dim("delete cancelled"));
        return Ok(());
    }

    let mut store = open_store(&database)?;
    if store.delete(id)? {
        ui::success(&format!("listing #{id} deleted"));
    }
    render(&store)
}

pub fn run_stats(database: PathBuf) -> anyhow::Result<()> {
    let store = open_store(&database)?;
    let count = store.count()?;

    ui::header("Catalog");
    println!(
        "{}",
        ui::stats_table(&[
            ("Database", database.display().to_string()),
            ("Listings", count.to_string()),
        ])
    );
    Ok(())
}

pub fn run_init(force: bool) -> anyhow::Result<()> {
    let path = config::default_config_path();
    let config = CarlotConfig {
        database: Some(config::default_database_path().display().to_string()),
    };
    config::write_config(&path, &config, force)?;
    ui::success(&format!("wrote {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_db(dir: &tempfile::TempDir) -> (PathBuf, i64) {
        let db_path = dir.path().join("catalog.db");
        let mut store = CatalogStore::open(&db_path).unwrap();
        let id = store
            .create(&NewListing::new("Honda", "25000").unwrap())
            .unwrap()
            .id;
        (db_path, id)
    }

    #[test]
    fn test_declined_delete_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (db_path, id) = seeded_db(&dir);

        // Without --yes the prompt declines on a non-interactive terminal,
        // so the record set must come back untouched.
        run_delete(db_path.clone(), id, false).unwrap();

        let store = CatalogStore::open(&db_path).unwrap();
        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
    }

    #[test]
    fn test_confirmed_delete_removes_record() {
        let dir = tempfile::tempdir().unwrap();
        let (db_path, id) = seeded_db(&dir);

        run_delete(db_path.clone(), id, true).unwrap();

        let store = CatalogStore::open(&db_path).unwrap();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_add_leaves_catalog_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let (db_path, id) = seeded_db(&dir);

        run_add(db_path.clone(), "", "25000").unwrap();
        run_add(db_path.clone(), "Toyota", "cheap").unwrap();

        let store = CatalogStore::open(&db_path).unwrap();
        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].brand, "Honda");
    }
}
