use std::io;

use thiserror::Error;

use stockroom_inventory::Inventory;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failures, split so callers can tell a fresh start from a broken file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file {0} not found")]
    NotFound(String),

    #[error("could not decode JSON from {location}: {source}")]
    Malformed {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode inventory: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("I/O error on {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: io::Error,
    },
}

/// Whole-document inventory storage.
///
/// `load` and `save` each read or write the complete inventory; nothing is held
/// open between calls.
pub trait InventoryStore {
    fn load(&self) -> StoreResult<Inventory>;

    /// Replace the stored inventory.
    fn save(&self, inventory: &Inventory) -> StoreResult<()>;

    /// Human-readable location used in log lines.
    fn location(&self) -> String;
}
