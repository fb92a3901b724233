use std::sync::RwLock;

use stockroom_inventory::Inventory;

use super::r#trait::{InventoryStore, StoreError, StoreResult};

/// In-memory inventory store.
///
/// Intended for tests/dev. Starts out empty-handed: loading before the first
/// save reports `NotFound`, like a missing file.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: RwLock<Option<Inventory>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            saved: RwLock::new(Some(inventory)),
        }
    }

    /// The last saved inventory, if any.
    pub fn snapshot(&self) -> Option<Inventory> {
        self.saved.read().ok()?.clone()
    }
}

impl InventoryStore for InMemoryStore {
    fn load(&self) -> StoreResult<Inventory> {
        self.snapshot()
            .ok_or_else(|| StoreError::NotFound(self.location()))
    }

    fn save(&self, inventory: &Inventory) -> StoreResult<()> {
        let mut saved = self.saved.write().map_err(|_| StoreError::Io {
            location: self.location(),
            source: std::io::Error::other("store lock poisoned"),
        })?;
        *saved = Some(inventory.clone());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_before_save_is_not_found() {
        assert!(matches!(InMemoryStore::new().load(), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn save_replaces_snapshot() {
        let store = InMemoryStore::new();
        let (inventory, _) = Inventory::from_entries(vec![("apple".to_string(), 3)]);
        store.save(&inventory).unwrap();
        assert_eq!(store.load().unwrap(), inventory);

        store.save(&Inventory::new()).unwrap();
        assert_eq!(store.snapshot(), Some(Inventory::new()));
    }
}
