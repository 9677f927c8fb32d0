use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, error, warn};

use crate::{
    Clock, HistoryError, NewVersion, Result, StoreError, SystemClock, Version, VersionComparison,
    VersionId, VersionPatch,
    store::{Query, SortDirection, VersionField, VersionStore},
};

/// Note given to versions created by [`VersionService::auto_save`].
pub const AUTOSAVE_NOTE: &str = "Auto-saved";

/// Autosaves within this many seconds of the latest version update it in place.
pub const DEFAULT_AUTOSAVE_WINDOW_SECS: i64 = 300;

const MAX_NUMBERING_ATTEMPTS: usize = 3;

/// Save, browse, revert and compare versions of a project.
///
/// One service is meant to be shared (by `Arc`) for the life of the process.
#[derive(Debug, Clone)]
pub struct VersionService {
    store: Arc<dyn VersionStore>,
    clock: Arc<dyn Clock>,
    autosave_window: Duration,
    author_id: Option<String>,
}

impl VersionService {
    pub fn new(store: Arc<dyn VersionStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn VersionStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            autosave_window: Duration::seconds(DEFAULT_AUTOSAVE_WINDOW_SECS),
            author_id: None,
        }
    }

    pub fn with_autosave_window(mut self, window: Duration) -> Self {
        self.autosave_window = window;
        self
    }

    /// Stamp versions created by this service with `author_id`.
    pub fn with_author(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = Some(author_id.into());
        self
    }

    pub fn autosave_window(&self) -> Duration {
        self.autosave_window
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// All versions of a project, highest version number first.
    pub async fn list(&self, project_id: &str) -> Result<Vec<Version>> {
        self.select("list versions", newest_first(project_id)).await
    }

    /// Like [`list`](Self::list), capped at `limit` rows.
    pub async fn list_page(&self, project_id: &str, limit: usize) -> Result<Vec<Version>> {
        self.select("list versions", newest_first(project_id).limit(limit))
            .await
    }

    /// The highest-numbered version of a project, if any.
    pub async fn latest(&self, project_id: &str) -> Result<Option<Version>> {
        let rows = self
            .select("fetch latest version", newest_first(project_id).limit(1))
            .await?;
        Ok(rows.into_iter().next())
    }

    pub async fn count(&self, project_id: &str) -> Result<usize> {
        let query = Query::new().eq(VersionField::ProjectId, project_id);
        self.store
            .count(&query)
            .await
            .map_err(|e| log_storage("count versions", e))
    }

    /// Append a new version with the next free number for the project.
    ///
    /// `note` defaults to `Version {n}`.
    pub async fn create(
        &self,
        project_id: &str,
        code: &str,
        note: Option<&str>,
        prompt_text: Option<&str>,
    ) -> Result<Version> {
        validate_project(project_id)?;

        let mut attempt = 0;
        loop {
            attempt += 1;
            let version_number = self.next_version_number(project_id).await?;
            let record = NewVersion {
                project_id: project_id.to_string(),
                code: code.to_string(),
                prompt_text: prompt_text.map(str::to_string),
                version_number,
                author_id: self.author_id.clone(),
                note: Some(
                    note.map(str::to_string)
                        .unwrap_or_else(|| format!("Version {version_number}")),
                ),
            };

            match self.store.insert(record).await {
                Ok(version) => {
                    debug!(project_id, version_number, id = %version.id, "created version");
                    return Ok(version);
                }
                Err(e @ StoreError::Conflict { .. }) if attempt < MAX_NUMBERING_ATTEMPTS => {
                    warn!(project_id, version_number, attempt, "{e}, renumbering");
                }
                Err(e) => return Err(log_storage("create version", e)),
            }
        }
    }

    pub async fn get(&self, id: &VersionId) -> Result<Version> {
        let rows = self
            .select("fetch version", Query::new().eq(VersionField::Id, *id).limit(1))
            .await?;
        rows.into_iter().next().ok_or_else(|| {
            error!(%id, "version not found");
            HistoryError::NotFound(*id)
        })
    }

    /// Append a copy of version `id` as the project's newest version.
    ///
    /// History is never rewritten; the reverted-to version stays where it is.
    pub async fn revert(&self, id: &VersionId) -> Result<Version> {
        let target = self.get(id).await?;
        let note = format!("Reverted to version {}", target.version_number);
        self.create(
            &target.project_id,
            &target.code,
            Some(&note),
            target.prompt_text.as_deref(),
        )
        .await
    }

    /// Permanently remove a version. Removing an absent version succeeds.
    pub async fn delete(&self, id: &VersionId) -> Result<()> {
        self.store
            .delete(id)
            .await
            .map_err(|e| log_storage("delete version", e))?;
        debug!(%id, "deleted version");
        Ok(())
    }

    /// Fetch both versions concurrently and diff their code by line position.
    pub async fn compare(&self, from: &VersionId, to: &VersionId) -> Result<VersionComparison> {
        let (from_version, to_version) = tokio::try_join!(self.get(from), self.get(to))?;
        Ok(VersionComparison::between(from_version, to_version))
    }

    /// Save `code` for a project, coalescing with a recent version.
    ///
    /// If the project's most recent version was created within the autosave
    /// window (inclusive), its code is overwritten in place and its number,
    /// note and timestamp are kept. A `None` prompt leaves the stored prompt
    /// as is. Otherwise a new version is created with note
    /// [`AUTOSAVE_NOTE`].
    pub async fn auto_save(
        &self,
        project_id: &str,
        code: &str,
        prompt_text: Option<&str>,
    ) -> Result<Version> {
        validate_project(project_id)?;

        let since = self.clock.now() - self.autosave_window;
        let recent = Query::new()
            .eq(VersionField::ProjectId, project_id)
            .since(VersionField::CreatedAt, since)
            .order_by(VersionField::CreatedAt, SortDirection::Descending)
            .limit(1);

        let existing = self.select("find recent version", recent).await?;
        match existing.into_iter().next() {
            Some(current) => {
                let patch = VersionPatch {
                    code: Some(code.to_string()),
                    prompt_text: prompt_text.map(str::to_string),
                };
                let updated = self
                    .store
                    .update(&current.id, patch)
                    .await
                    .map_err(|e| log_storage("update version", e))?;
                debug!(project_id, version_number = updated.version_number, "autosave coalesced");
                Ok(updated)
            }
            None => {
                self.create(project_id, code, Some(AUTOSAVE_NOTE), prompt_text)
                    .await
            }
        }
    }

    async fn next_version_number(&self, project_id: &str) -> Result<u32> {
        let newest = self
            .select("number version", newest_first(project_id).limit(1))
            .await?;
        Ok(newest.first().map_or(1, |v| v.version_number + 1))
    }

    async fn select(&self, operation: &'static str, query: Query) -> Result<Vec<Version>> {
        self.store
            .select(&query)
            .await
            .map_err(|e| log_storage(operation, e))
    }
}

fn newest_first(project_id: &str) -> Query {
    Query::new()
        .eq(VersionField::ProjectId, project_id)
        .order_by(VersionField::VersionNumber, SortDirection::Descending)
}

fn validate_project(project_id: &str) -> Result<()> {
    if project_id.trim().is_empty() {
        return Err(HistoryError::Validation(
            "project id must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn log_storage(operation: &'static str, source: StoreError) -> HistoryError {
    error!(operation, "{source}");
    HistoryError::storage(operation, source)
}
