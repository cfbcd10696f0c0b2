//! `gildedrose-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the inventory rule
//! and its harness (no IO, no logging setup).

pub mod error;

pub use error::{DomainError, DomainResult};
