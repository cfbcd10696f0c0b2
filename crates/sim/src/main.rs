use anyhow::Context;

use gildedrose_inventory::canonical_catalog;
use gildedrose_sim::{
    OutputFormat, SimulationConfig, load_catalog, render_json, render_text, simulate,
};

fn main() -> anyhow::Result<()> {
    let days_arg = std::env::args().nth(1);
    let config = SimulationConfig::from_env()?.with_days_arg(days_arg.as_deref())?;

    gildedrose_observability::init(config.log_format);
    tracing::info!(
        days = config.days,
        catalog = ?config.catalog_path,
        output = ?config.output,
        "starting simulation"
    );

    let items = match &config.catalog_path {
        Some(path) => load_catalog(path)?,
        None => canonical_catalog(),
    };

    let snapshots = simulate(items, config.days);
    let report = match config.output {
        OutputFormat::Text => render_text(&snapshots),
        OutputFormat::Json => render_json(&snapshots).context("failed to render JSON report")?,
    };
    print!("{report}");

    Ok(())
}
