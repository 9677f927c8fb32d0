//! Persistence interface for versions.
//!
//! [`VersionStore`] is the contract a backend must meet: filtered selects,
//! counts, single-row insert, update and delete. The backend owns identity
//! and timestamps, and rejects a second version with the same
//! `(project_id, version_number)`.

mod json_file;
mod memory;
mod query;
mod table;

use async_trait::async_trait;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use query::{FieldValue, Filter, Query, SortDirection, VersionField};
pub use table::VersionTable;

use crate::{NewVersion, StoreResult, Version, VersionId, VersionPatch};

/// An abstract store for version rows.
///
/// Implementations must be safe to share across tasks; the service holds one
/// behind an `Arc` for the life of the process.
#[async_trait]
pub trait VersionStore: Send + Sync {
    /// Rows matching the query's filters, ordered and limited as requested.
    async fn select(&self, query: &Query) -> StoreResult<Vec<Version>>;

    /// Number of rows matching the query's filters. Order and limit are ignored.
    async fn count(&self, query: &Query) -> StoreResult<usize>;

    /// Insert one row and return it as stored.
    ///
    /// Fails with [`StoreError::Conflict`](crate::StoreError::Conflict) when
    /// the project already has a version with the same number.
    async fn insert(&self, record: NewVersion) -> StoreResult<Version>;

    /// Overwrite fields on the row with `id` and return the updated row.
    async fn update(&self, id: &VersionId, patch: VersionPatch) -> StoreResult<Version>;

    /// Remove the row with `id`. Removing an absent row is not an error.
    async fn delete(&self, id: &VersionId) -> StoreResult<()>;
}

impl std::fmt::Debug for dyn VersionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn VersionStore")
    }
}
