//! Inventory domain module.
//!
//! Stock rules live in the [`Inventory`] aggregate as deterministic domain
//! logic. The `ops` functions add argument checking, logging and the journal
//! on top; `report` renders the current stock.

pub mod item;
pub mod journal;
pub mod ops;
pub mod report;
pub mod stock;

pub use item::ItemName;
pub use journal::{Journal, LogEntry};
pub use ops::{add_item, check_low_items, get_qty, remove_item};
pub use report::{ItemsReport, print_data, write_report};
pub use stock::{
    AddItem, DEFAULT_LOW_STOCK_THRESHOLD, Inventory, ItemAdded, ItemDepleted, ItemRemoved,
    RemoveItem, StockCommand, StockEvent,
};
