use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Query, SortDirection};
use crate::{NewVersion, StoreError, StoreResult, Version, VersionId, VersionPatch};

/// In-process version rows, in insertion order.
///
/// Shared by [`MemoryStore`](super::MemoryStore) and
/// [`JsonFileStore`](super::JsonFileStore); also the on-disk JSON shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionTable {
    #[serde(default)]
    versions: Vec<Version>,
}

impl VersionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn select(&self, query: &Query) -> Vec<Version> {
        let mut rows: Vec<Version> = self
            .versions
            .iter()
            .filter(|v| query.matches(v))
            .cloned()
            .collect();

        if let Some((field, direction)) = query.order {
            // Stable ascending sort; descending reverses it so that among
            // equal keys the most recently inserted row comes first.
            rows.sort_by_key(|v| field.value_of(v));
            if direction == SortDirection::Descending {
                rows.reverse();
            }
        }

        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }
        rows
    }

    pub fn count(&self, query: &Query) -> usize {
        self.versions.iter().filter(|v| query.matches(v)).count()
    }

    pub fn insert(&mut self, record: NewVersion, now: DateTime<Utc>) -> StoreResult<Version> {
        let taken = self.versions.iter().any(|v| {
            v.project_id == record.project_id && v.version_number == record.version_number
        });
        if taken {
            return Err(StoreError::Conflict {
                project_id: record.project_id,
                version_number: record.version_number,
            });
        }

        let version = record.into_version(VersionId::new(), now);
        self.versions.push(version.clone());
        Ok(version)
    }

    pub fn update(&mut self, id: &VersionId, patch: VersionPatch) -> StoreResult<Version> {
        let version = self
            .versions
            .iter_mut()
            .find(|v| v.id == *id)
            .ok_or(StoreError::Missing(*id))?;
        patch.apply(version);
        Ok(version.clone())
    }

    /// Returns whether a row was removed.
    pub fn delete(&mut self, id: &VersionId) -> bool {
        let before = self.versions.len();
        self.versions.retain(|v| v.id != *id);
        self.versions.len() != before
    }
}
