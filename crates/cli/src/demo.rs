//! Fixed demonstration run: load, adjust stock, report, save.

use std::io::Write;

use anyhow::Context;
use serde_json::{Value, json};

use stockroom_core::DomainError;
use stockroom_infra::{AppConfig, InventoryStore, load_or_empty, save_logged};
use stockroom_inventory::{
    Inventory, Journal, add_item, check_low_items, get_qty, remove_item, write_report,
};

/// One scripted operation. Arguments stay untyped so validation gets exercised.
#[derive(Debug, Clone)]
enum Step {
    Add(Value, Value),
    Remove(&'static str, Value),
}

fn script() -> Vec<Step> {
    vec![
        Step::Add(json!("apple"), json!(10)),
        Step::Add(json!("banana"), json!(5)),
        Step::Add(json!(123), json!("ten")),
        Step::Remove("apple", json!(3)),
        Step::Remove("orange", json!(1)),
        Step::Remove("banana", json!("two")),
    ]
}

/// What a run ended with.
#[derive(Debug)]
pub struct DemoRun {
    pub inventory: Inventory,
    pub journal: Journal,
    /// Steps the inventory refused, in script order.
    pub rejected: Vec<DomainError>,
    pub saved: bool,
}

/// Run the demo against `store`, writing console output to `out`.
///
/// Domain and storage failures are logged and absorbed. Only a failure to
/// write to `out` is returned.
pub fn run<S, W>(store: &S, config: &AppConfig, out: &mut W) -> anyhow::Result<DemoRun>
where
    S: InventoryStore + ?Sized,
    W: Write,
{
    let mut inventory = load_or_empty(store);
    let mut journal = Journal::new();
    let mut rejected = Vec::new();

    for step in script() {
        let result = match step {
            Step::Add(item, qty) => add_item(&mut inventory, item, qty, &mut journal),
            Step::Remove(item, qty) => remove_item(&mut inventory, item, qty),
        };
        // Already logged by the operation; kept so callers can inspect the kind.
        if let Err(err) = result {
            rejected.push(err);
        }
    }

    writeln!(out, "Apple stock: {}", get_qty(&inventory, "apple"))
        .context("writing stock line")?;
    writeln!(
        out,
        "Low items: {:?}",
        check_low_items(&inventory, config.low_stock_threshold)
    )
    .context("writing low items line")?;

    let saved = save_logged(store, &inventory).is_ok();
    write_report(&inventory, out).context("writing items report")?;
    tracing::debug!(
        entries = journal.len(),
        rejected = rejected.len(),
        saved,
        "demo run finished"
    );

    Ok(DemoRun {
        inventory,
        journal,
        rejected,
        saved,
    })
}
