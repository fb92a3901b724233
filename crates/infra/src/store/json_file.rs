use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use stockroom_inventory::Inventory;

use super::r#trait::{InventoryStore, StoreError, StoreResult};

const INDENT: &[u8] = b"    ";

/// Inventory stored as a single JSON object of `item -> quantity`.
///
/// The file is read and written whole, UTF-8, indented with four spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        if source.kind() == ErrorKind::NotFound {
            StoreError::NotFound(self.location())
        } else {
            StoreError::Io {
                location: self.location(),
                source,
            }
        }
    }
}

impl InventoryStore for JsonFileStore {
    fn load(&self) -> StoreResult<Inventory> {
        let text = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let raw: IndexMap<String, Value> =
            serde_json::from_str(&text).map_err(|source| StoreError::Malformed {
                location: self.location(),
                source,
            })?;

        // A bad value costs only its own entry, never the whole file.
        let mut entries = Vec::with_capacity(raw.len());
        for (item, value) in raw {
            match value.as_i64() {
                Some(qty) => entries.push((item, qty)),
                None => tracing::warn!(
                    "Dropping {item} from {}: quantity {value} is not an integer.",
                    self.location()
                ),
            }
        }

        let (inventory, dropped) = Inventory::from_entries(entries);
        for (item, qty) in dropped {
            tracing::warn!(
                "Dropping {item} from {}: quantity {qty} is not positive.",
                self.location()
            );
        }
        Ok(inventory)
    }

    fn save(&self, inventory: &Inventory) -> StoreResult<()> {
        let bytes = to_indented_json(inventory)?;
        fs::write(&self.path, bytes).map_err(|source| StoreError::Io {
            location: self.location(),
            source,
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn to_indented_json(inventory: &Inventory) -> StoreResult<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    inventory.serialize(&mut ser).map_err(StoreError::Encode)?;
    Ok(buf)
}
