//! Human-readable items report.

use std::io::{self, Write};

use crate::stock::Inventory;

const HEADER: &str = "--- Items Report ---";
const FOOTER: &str = "--------------------";

/// Display adapter rendering the bordered report block.
pub struct ItemsReport<'a>(pub &'a Inventory);

impl core::fmt::Display for ItemsReport<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{HEADER}")?;
        if self.0.is_empty() {
            writeln!(f, "Inventory is empty.")?;
        }
        for (item, qty) in self.0.iter() {
            writeln!(f, "{item} -> {qty}")?;
        }
        writeln!(f, "{FOOTER}")?;
        writeln!(f)
    }
}

pub fn write_report<W: Write>(inventory: &Inventory, out: &mut W) -> io::Result<()> {
    write!(out, "{}", ItemsReport(inventory))
}

/// Print the report to stdout. A closed stdout is logged, not raised.
pub fn print_data(inventory: &Inventory) {
    let stdout = io::stdout();
    if let Err(err) = write_report(inventory, &mut stdout.lock()) {
        tracing::error!("Could not print items report: {err}");
    }
}
