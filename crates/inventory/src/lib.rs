//! Inventory domain module.
//!
//! This crate contains the item catalog: tagged item variants and the owning
//! registry over them, implemented as deterministic domain logic (no IO, no
//! storage formats). Persistence is reached only through [`CatalogStore`].

pub mod catalog;
pub mod item;
pub mod store;

pub use catalog::{Catalog, CatalogSnapshot};
pub use item::{Item, ItemKind, ItemKindTag, Size};
pub use store::{CatalogStore, InMemoryCatalogStore};
