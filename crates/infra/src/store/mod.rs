//! Inventory persistence boundary.
//!
//! `InventoryStore` implementations report typed failures. The `load_*` and
//! `save_*` helpers here turn those into log lines and keep the run going:
//! a missing or unreadable inventory becomes an empty one, a failed save is
//! reported and skipped.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

use std::path::Path;

use stockroom_inventory::Inventory;

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
pub use r#trait::{InventoryStore, StoreError, StoreResult};

/// Load from `store`, falling back to an empty inventory on any failure.
pub fn load_or_empty<S: InventoryStore + ?Sized>(store: &S) -> Inventory {
    match store.load() {
        Ok(inventory) => {
            tracing::info!("Data loaded from {}.", store.location());
            inventory
        }
        Err(StoreError::NotFound(location)) => {
            tracing::warn!("File {location} not found. Starting with empty stock.");
            Inventory::new()
        }
        Err(StoreError::Malformed { location, source }) => {
            tracing::error!("Could not decode JSON from {location}: {source}. Starting fresh.");
            Inventory::new()
        }
        Err(err) => {
            tracing::error!("Could not read inventory: {err}. Starting fresh.");
            Inventory::new()
        }
    }
}

/// Save to `store`, logging the outcome. The error is returned for callers that care.
pub fn save_logged<S>(store: &S, inventory: &Inventory) -> StoreResult<()>
where
    S: InventoryStore + ?Sized,
{
    match store.save(inventory) {
        Ok(()) => {
            tracing::info!("Data saved to {}.", store.location());
            Ok(())
        }
        Err(err) => {
            tracing::error!("Could not write to {}: {err}", store.location());
            Err(err)
        }
    }
}

/// Load the JSON inventory at `path`; see [`load_or_empty`].
pub fn load_data(path: impl AsRef<Path>) -> Inventory {
    load_or_empty(&JsonFileStore::new(path.as_ref()))
}

/// Save `inventory` as JSON at `path`; see [`save_logged`].
pub fn save_data(inventory: &Inventory, path: impl AsRef<Path>) -> StoreResult<()> {
    save_logged(&JsonFileStore::new(path.as_ref()), inventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_data_missing_path_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_data(dir.path().join("nope.json")).is_empty());
    }

    #[test]
    fn load_data_invalid_json_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{ this is not json").unwrap();
        assert!(load_data(&path).is_empty());
    }

    #[test]
    fn load_data_unreadable_path_is_empty() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be read as a file.
        assert!(load_data(dir.path()).is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        let (inventory, _) = Inventory::from_entries(vec![
            ("apple".to_string(), 10),
            ("banana".to_string(), 5),
        ]);
        save_data(&inventory, &path).unwrap();
        assert_eq!(load_data(&path), inventory);
    }

    #[test]
    fn failed_save_is_returned_not_raised() {
        let dir = TempDir::new().unwrap();
        let err = save_data(&Inventory::new(), dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
