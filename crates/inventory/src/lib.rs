//! Inventory domain module (Gilded Rose daily update rule).
//!
//! This crate contains business rules for inventory ageing, implemented purely
//! as deterministic domain logic (no IO, no storage). Callers own the items and
//! advance them one simulated day at a time.

pub mod catalog;
pub mod category;
pub mod inventory;
pub mod item;
pub mod quality;
pub mod update;

pub use catalog::canonical_catalog;
pub use category::{Category, classify};
pub use inventory::Inventory;
pub use item::Item;
pub use quality::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
pub use update::{advance_one_day, update_item};
