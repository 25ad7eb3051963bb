//! Owning registry of catalog items keyed by id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockroom_core::{Clock, DomainError, DomainResult, Entity, ItemId, Money};

use crate::item::{Item, ItemKindTag};

/// Plain-data copy of a catalog, handed to persistence collaborators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub items: Vec<Item>,
}

/// The catalog exclusively owns its items. Iteration is in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: BTreeMap<ItemId, Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a catalog from a snapshot. Later duplicates win.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        let mut catalog = Self::new();
        for item in snapshot.items {
            catalog.add(item);
        }
        catalog
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            items: self.items.values().cloned().collect(),
        }
    }

    /// Insert `item`, replacing any existing item with the same id.
    pub fn add(&mut self, item: Item) {
        let id = item.id().clone();
        if self.items.insert(id.clone(), item).is_some() {
            tracing::debug!(item_id = %id, "catalog item overwritten");
        } else {
            tracing::debug!(item_id = %id, "catalog item added");
        }
    }

    /// Returns whether an item was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.items.remove(id).is_some();
        if removed {
            tracing::debug!(item_id = id, "catalog item removed");
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn list(&self) -> Vec<&Item> {
        self.iter().collect()
    }

    /// Case-insensitive substring search over item names.
    pub fn find_by_name(&self, needle: &str) -> Vec<&Item> {
        let needle = needle.to_lowercase();
        self.iter()
            .filter(|item| item.name().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn find_by_variant(&self, tag: ItemKindTag) -> Vec<&Item> {
        self.iter().filter(|item| item.tag() == tag).collect()
    }

    pub fn sell(&mut self, id: &str, quantity: u32) -> DomainResult<()> {
        let item = self.get_mut(id)?;
        item.sell(quantity)?;
        tracing::debug!(
            item_id = id,
            quantity,
            remaining = item.quantity_in_stock(),
            "catalog item sold"
        );
        Ok(())
    }

    /// Non-positive amounts are ignored but still require the id to exist.
    pub fn restock(&mut self, id: &str, amount: i64) -> DomainResult<()> {
        let item = self.get_mut(id)?;
        item.restock(amount);
        tracing::debug!(
            item_id = id,
            amount,
            stock = item.quantity_in_stock(),
            "catalog item restocked"
        );
        Ok(())
    }

    pub fn total_value(&self) -> Money {
        self.iter().map(Item::total_value).sum()
    }

    /// Remove every perishable item that is expired according to `clock`.
    ///
    /// Returns the removed ids in ascending order.
    pub fn sweep_expired(&mut self, clock: &dyn Clock) -> Vec<ItemId> {
        let today = clock.today();
        let expired: Vec<ItemId> = self
            .iter()
            .filter(|item| item.is_expired_on(today))
            .map(|item| item.id().clone())
            .collect();

        for id in &expired {
            self.items.remove(id);
            tracing::warn!(item_id = %id, "expired item swept from catalog");
        }
        expired
    }

    fn get_mut(&mut self, id: &str) -> DomainResult<&mut Item> {
        match self.items.get_mut(id) {
            Some(item) => Ok(item),
            None => Err(DomainError::not_found(id)),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::collections::btree_map::Values<'a, ItemId, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}
