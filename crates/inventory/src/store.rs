//! Catalog persistence boundary.
//!
//! The catalog itself performs no IO. Drivers that need persistence inject a
//! `CatalogStore` and move snapshots across it explicitly.

use std::sync::{Arc, RwLock};

use stockroom_core::{DomainError, DomainResult};

use crate::catalog::{Catalog, CatalogSnapshot};

/// Load/save abstraction for catalog snapshots.
pub trait CatalogStore: Send + Sync {
    fn load(&self) -> DomainResult<CatalogSnapshot>;
    fn save(&self, snapshot: &CatalogSnapshot) -> DomainResult<()>;

    /// Load and rebuild a catalog in one step.
    fn load_catalog(&self) -> DomainResult<Catalog> {
        self.load().map(Catalog::from_snapshot)
    }
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn load(&self) -> DomainResult<CatalogSnapshot> {
        (**self).load()
    }

    fn save(&self, snapshot: &CatalogSnapshot) -> DomainResult<()> {
        (**self).save(snapshot)
    }
}

/// In-memory store for tests/dev. Starts out holding an empty snapshot.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    inner: RwLock<CatalogSnapshot>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn load(&self) -> DomainResult<CatalogSnapshot> {
        let snapshot = self
            .inner
            .read()
            .map_err(|_| DomainError::storage("catalog store lock poisoned"))?;
        Ok(snapshot.clone())
    }

    fn save(&self, snapshot: &CatalogSnapshot) -> DomainResult<()> {
        let mut slot = self
            .inner
            .write()
            .map_err(|_| DomainError::storage("catalog store lock poisoned"))?;
        *slot = snapshot.clone();
        tracing::debug!(items = snapshot.items.len(), "catalog snapshot saved");
        Ok(())
    }
}
