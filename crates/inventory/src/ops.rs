//! Stock operations with logging.
//!
//! These wrap the [`Inventory`] aggregate for callers holding loosely-typed
//! arguments. Every failure is logged and returned; none of them leaves the
//! inventory partially changed.

use chrono::Utc;
use serde_json::Value;

use stockroom_core::{Aggregate, DomainError, DomainResult};
use stockroom_events::Event;

use crate::item::{ItemName, quantity_arg, text_arg};
use crate::journal::Journal;
use crate::stock::{AddItem, Inventory, RemoveItem, StockCommand, StockEvent};

/// Add `qty` of `item`, recording an "Added" entry in `journal`.
///
/// `item` must be text and `qty` an integer; otherwise this is a logged no-op.
/// An empty name is rejected with a warning.
pub fn add_item(
    inventory: &mut Inventory,
    item: impl Into<Value>,
    qty: impl Into<Value>,
    journal: &mut Journal,
) -> DomainResult<Vec<StockEvent>> {
    let (item, qty) = (item.into(), qty.into());
    let result = parse_add(&item, &qty)
        .and_then(|cmd| inventory.execute(&StockCommand::AddItem(cmd)));

    match result {
        Ok(events) => {
            for event in &events {
                if let StockEvent::ItemAdded(e) = event {
                    let message = format!("Added {} of {}", e.qty, e.item);
                    let entry = journal.record_event(event, message);
                    tracing::info!("{entry}");
                }
            }
            log_events(&events);
            Ok(events)
        }
        Err(err) => {
            log_rejection(&err);
            Err(err)
        }
    }
}

/// Remove `qty` of `item`. Dropping to zero or below removes the item.
///
/// A missing item is a warning and a no-op; a non-integer `qty` is an error
/// and a no-op.
pub fn remove_item(
    inventory: &mut Inventory,
    item: &str,
    qty: impl Into<Value>,
) -> DomainResult<Vec<StockEvent>> {
    let qty = qty.into();
    let result = quantity_arg(&qty).and_then(|qty| {
        inventory.execute(&StockCommand::RemoveItem(RemoveItem {
            item: item.to_string(),
            qty,
            occurred_at: Utc::now(),
        }))
    });

    match result {
        Ok(events) => {
            log_events(&events);
            Ok(events)
        }
        Err(err) => {
            log_rejection(&err);
            Err(err)
        }
    }
}

/// Quantity on hand, or 0 when absent.
pub fn get_qty(inventory: &Inventory, item: &str) -> i64 {
    inventory.get_qty(item)
}

/// Items whose quantity is strictly below `threshold`.
pub fn check_low_items(inventory: &Inventory, threshold: i64) -> Vec<String> {
    inventory.check_low_items(threshold)
}

// Type checks run before the emptiness check.
fn parse_add(item: &Value, qty: &Value) -> DomainResult<AddItem> {
    let name = text_arg(item)?;
    let qty = quantity_arg(qty)?;
    Ok(AddItem {
        item: ItemName::new(name)?,
        qty,
        occurred_at: Utc::now(),
    })
}

fn log_events(events: &[StockEvent]) {
    for event in events {
        tracing::debug!(event = %event.label(), at = %event.occurred_at(), "stock event applied");
        if let StockEvent::ItemDepleted(e) = event {
            tracing::info!("Removed all stock for {}.", e.item);
        }
    }
}

fn log_rejection(err: &DomainError) {
    match err {
        DomainError::EmptyItemName => tracing::warn!("No item specified. Ignoring."),
        DomainError::NotFound(item) => {
            tracing::warn!("Item {item} not in stock, cannot remove.")
        }
        DomainError::Validation(msg) => tracing::error!("Invalid arguments: {msg}"),
        DomainError::InvariantViolation(msg) => {
            tracing::error!("Rejected stock change: {msg}")
        }
    }
}
