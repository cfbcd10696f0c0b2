//! `gildedrose-sim` — drives the inventory rule over a number of simulated days.
//!
//! The binary wires configuration, logging and output; this library holds the
//! testable pieces.

pub mod config;
pub mod report;
pub mod simulation;

pub use config::{OutputFormat, SimulationConfig};
pub use report::{render_json, render_text};
pub use simulation::{DaySnapshot, load_catalog, simulate};
