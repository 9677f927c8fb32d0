use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Query, VersionStore, VersionTable};
use crate::{
    Clock, NewVersion, StoreResult, SystemClock, Version, VersionId, VersionPatch,
};

/// A [`VersionStore`] held entirely in memory.
///
/// The clock stands in for database server time when stamping `created_at`.
#[derive(Debug)]
pub struct MemoryStore {
    table: RwLock<VersionTable>,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: RwLock::new(VersionTable::new()),
            clock,
        }
    }

    /// Number of stored rows across all projects.
    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.read().await.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VersionStore for MemoryStore {
    async fn select(&self, query: &Query) -> StoreResult<Vec<Version>> {
        Ok(self.table.read().await.select(query))
    }

    async fn count(&self, query: &Query) -> StoreResult<usize> {
        Ok(self.table.read().await.count(query))
    }

    async fn insert(&self, record: NewVersion) -> StoreResult<Version> {
        let now = self.clock.now();
        self.table.write().await.insert(record, now)
    }

    async fn update(&self, id: &VersionId, patch: VersionPatch) -> StoreResult<Version> {
        self.table.write().await.update(id, patch)
    }

    async fn delete(&self, id: &VersionId) -> StoreResult<()> {
        self.table.write().await.delete(id);
        Ok(())
    }
}
