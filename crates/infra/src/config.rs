//! Configuration loading and representation.

use std::path::PathBuf;

use stockroom_inventory::DEFAULT_LOW_STOCK_THRESHOLD;

/// Inventory file used when no explicit path is given.
pub const DEFAULT_DATA_PATH: &str = "inventory.json";

/// Runtime settings. There are no flags or config files; the binary runs on defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Inventory file, relative to the working directory unless absolute.
    pub data_path: PathBuf,
    /// Items strictly below this quantity are reported as low stock.
    pub low_stock_threshold: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl AppConfig {
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    pub fn with_low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }
}
