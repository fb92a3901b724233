use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use stockroom_core::{Aggregate, DomainError, DomainResult};
use stockroom_events::Event;

use crate::item::ItemName;

/// Threshold used by the low-stock scan when the caller has no preference.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Aggregate: on-hand quantity per item for a single location.
///
/// Invariant: every stored quantity is positive. A change that would leave an
/// item at zero or below removes the item instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    items: IndexMap<String, i64>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from stored entries, keeping their order.
    ///
    /// Entries with a non-positive quantity are left out and returned so the
    /// caller can report them.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, i64)>,
    ) -> (Self, Vec<(String, i64)>) {
        let mut items = IndexMap::new();
        let mut dropped = Vec::new();
        for (item, qty) in entries {
            if qty > 0 {
                items.insert(item, qty);
            } else {
                dropped.push((item, qty));
            }
        }
        (Self { items }, dropped)
    }

    /// Quantity on hand, or 0 when the item is absent.
    pub fn get_qty(&self, item: &str) -> i64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Names of items whose quantity is strictly below `threshold`, in inventory order.
    pub fn check_low_items(&self, threshold: i64) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.items.iter().map(|(item, qty)| (item.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub item: ItemName,
    pub qty: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveItem.
///
/// The item is plain text: an empty or unknown name is simply not in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub item: String,
    pub qty: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockCommand {
    AddItem(AddItem),
    RemoveItem(RemoveItem),
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub item: String,
    pub qty: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub item: String,
    pub qty: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemDepleted. The item no longer has stock and is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDepleted {
    pub item: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
    ItemDepleted(ItemDepleted),
}

impl Event for StockEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StockEvent::ItemAdded(_) => "inventory.stock.added",
            StockEvent::ItemRemoved(_) => "inventory.stock.removed",
            StockEvent::ItemDepleted(_) => "inventory.stock.depleted",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            StockEvent::ItemAdded(e) => e.occurred_at,
            StockEvent::ItemRemoved(e) => e.occurred_at,
            StockEvent::ItemDepleted(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Inventory {
    type Command = StockCommand;
    type Event = StockEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            StockEvent::ItemAdded(e) => {
                let qty = self.items.entry(e.item.clone()).or_insert(0);
                *qty = qty.saturating_add(e.qty);
            }
            StockEvent::ItemRemoved(e) => {
                if let Some(qty) = self.items.get_mut(&e.item) {
                    *qty = qty.saturating_sub(e.qty);
                }
            }
            StockEvent::ItemDepleted(e) => {
                self.items.shift_remove(&e.item);
            }
        }
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            StockCommand::AddItem(cmd) => self.handle_add(cmd),
            StockCommand::RemoveItem(cmd) => self.handle_remove(cmd),
        }
    }
}

impl Inventory {
    fn handle_add(&self, cmd: &AddItem) -> DomainResult<Vec<StockEvent>> {
        let item = cmd.item.as_str();
        let new_qty = self
            .get_qty(item)
            .checked_add(cmd.qty)
            .ok_or_else(|| DomainError::invariant(format!("quantity overflow for {item}")))?;

        let mut events = vec![StockEvent::ItemAdded(ItemAdded {
            item: item.to_string(),
            qty: cmd.qty,
            occurred_at: cmd.occurred_at,
        })];
        if new_qty <= 0 {
            events.push(depleted(item, cmd.occurred_at));
        }
        Ok(events)
    }

    fn handle_remove(&self, cmd: &RemoveItem) -> DomainResult<Vec<StockEvent>> {
        let current = self
            .items
            .get(&cmd.item)
            .copied()
            .ok_or_else(|| DomainError::not_found(cmd.item.clone()))?;
        let new_qty = current
            .checked_sub(cmd.qty)
            .ok_or_else(|| DomainError::invariant(format!("quantity overflow for {}", cmd.item)))?;

        let mut events = vec![StockEvent::ItemRemoved(ItemRemoved {
            item: cmd.item.clone(),
            qty: cmd.qty,
            occurred_at: cmd.occurred_at,
        })];
        if new_qty <= 0 {
            events.push(depleted(&cmd.item, cmd.occurred_at));
        }
        Ok(events)
    }
}

fn depleted(item: &str, occurred_at: DateTime<Utc>) -> StockEvent {
    StockEvent::ItemDepleted(ItemDepleted {
        item: item.to_string(),
        occurred_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(item: &str, qty: i64) -> StockCommand {
        StockCommand::AddItem(AddItem {
            item: ItemName::new(item).unwrap(),
            qty,
            occurred_at: Utc::now(),
        })
    }

    fn remove(item: &str, qty: i64) -> StockCommand {
        StockCommand::RemoveItem(RemoveItem {
            item: item.to_string(),
            qty,
            occurred_at: Utc::now(),
        })
    }

    fn stocked(entries: &[(&str, i64)]) -> Inventory {
        let (inventory, dropped) =
            Inventory::from_entries(entries.iter().map(|(i, q)| (i.to_string(), *q)));
        assert!(dropped.is_empty());
        inventory
    }

    #[test]
    fn handle_does_not_mutate() {
        let inventory = stocked(&[("apple", 10)]);
        let before = inventory.clone();
        let events = inventory.handle(&add("apple", 5)).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(inventory, before);
    }

    #[test]
    fn add_creates_then_increments() {
        let mut inventory = Inventory::new();
        inventory.execute(&add("apple", 10)).unwrap();
        assert_eq!(inventory.get_qty("apple"), 10);
        inventory.execute(&add("apple", 5)).unwrap();
        assert_eq!(inventory.get_qty("apple"), 15);
    }

    #[test]
    fn walkthrough_from_empty_to_empty() {
        let mut inventory = Inventory::new();
        inventory.execute(&add("apple", 10)).unwrap();
        inventory.execute(&add("apple", 5)).unwrap();
        assert_eq!(inventory, stocked(&[("apple", 15)]));

        let events = inventory.execute(&remove("apple", 20)).unwrap();
        assert!(matches!(events.last(), Some(StockEvent::ItemDepleted(_))));
        assert!(inventory.is_empty());
        assert_eq!(inventory.get_qty("apple"), 0);
    }

    #[test]
    fn removing_exact_quantity_deletes_key() {
        let mut inventory = stocked(&[("apple", 3)]);
        inventory.execute(&remove("apple", 3)).unwrap();
        assert!(!inventory.contains("apple"));
    }

    #[test]
    fn remove_missing_item_is_not_found_and_no_op() {
        let mut inventory = stocked(&[("apple", 3)]);
        let err = inventory.execute(&remove("orange", 1)).unwrap_err();
        assert_eq!(err, DomainError::NotFound("orange".to_string()));
        assert_eq!(inventory, stocked(&[("apple", 3)]));
    }

    #[test]
    fn add_never_stores_non_positive_quantity() {
        let mut inventory = stocked(&[("apple", 3)]);
        inventory.execute(&add("apple", -3)).unwrap();
        assert!(!inventory.contains("apple"));

        inventory.execute(&add("pear", 0)).unwrap();
        assert!(!inventory.contains("pear"));
    }

    #[test]
    fn overflow_is_rejected_without_change() {
        let mut inventory = stocked(&[("apple", i64::MAX)]);
        let err = inventory.execute(&add("apple", 1)).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(inventory.get_qty("apple"), i64::MAX);
    }

    #[test]
    fn low_items_keep_inventory_order() {
        let inventory = stocked(&[("pear", 1), ("apple", 10), ("banana", 4), ("kiwi", 5)]);
        assert_eq!(
            inventory.check_low_items(DEFAULT_LOW_STOCK_THRESHOLD),
            vec!["pear".to_string(), "banana".to_string()]
        );
        assert!(Inventory::new().check_low_items(100).is_empty());
    }

    #[test]
    fn from_entries_drops_non_positive() {
        let (inventory, dropped) = Inventory::from_entries(vec![
            ("apple".to_string(), 2),
            ("ghost".to_string(), 0),
            ("debt".to_string(), -4),
        ]);
        assert_eq!(inventory.len(), 1);
        assert_eq!(
            dropped,
            vec![("ghost".to_string(), 0), ("debt".to_string(), -4)]
        );
    }

    #[test]
    fn event_types_are_stable() {
        let events = Inventory::new().handle(&add("apple", 0)).unwrap();
        let labels: Vec<_> = events.iter().map(|e| e.label()).collect();
        assert_eq!(
            labels,
            vec!["inventory.stock.added/v1", "inventory.stock.depleted/v1"]
        );
    }
}
