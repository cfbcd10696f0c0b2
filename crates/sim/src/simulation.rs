use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use gildedrose_inventory::{Inventory, Item};

/// Stock as it stood at the start of a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySnapshot {
    pub day: u64,
    pub items: Vec<Item>,
}

/// Record day 0, then advance the stock once per day for `days` days.
///
/// Returns `days + 1` snapshots.
pub fn simulate(items: Vec<Item>, days: u32) -> Vec<DaySnapshot> {
    let mut inventory = Inventory::new(items);
    let mut snapshots = Vec::new();

    snapshots.push(snapshot(&inventory));
    for _ in 0..days {
        inventory.advance_one_day();
        snapshots.push(snapshot(&inventory));
    }

    tracing::debug!(days, items = inventory.items().len(), "simulation finished");
    snapshots
}

fn snapshot(inventory: &Inventory) -> DaySnapshot {
    DaySnapshot {
        day: inventory.days_elapsed(),
        items: inventory.items().to_vec(),
    }
}

/// Load a stock list from a JSON array of items.
pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<Item>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let items: Vec<Item> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;
    tracing::info!(path = %path.display(), items = items.len(), "catalog loaded");
    Ok(items)
}
