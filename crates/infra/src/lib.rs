//! Infrastructure layer: inventory persistence and configuration.

pub mod config;
pub mod store;

pub use config::AppConfig;
pub use store::{
    InMemoryStore, InventoryStore, JsonFileStore, StoreError, StoreResult, load_data,
    load_or_empty, save_data, save_logged,
};
