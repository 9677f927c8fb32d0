//! Opening the project's version history.

use std::{
    io::Read,
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::Duration;
use draftsmith_history::{JsonFileStore, VersionService};
use draftsmith_manifest::HistoryConfig;
use eyre::{Context, Result};
use tracing::debug;

/// A version service bound to one project.
pub struct HistoryContext {
    pub service: VersionService,
    pub project: String,
    pub store_path: PathBuf,
}

/// Open the history store configured in the manifest.
///
/// A relative store path resolves against `root`, the directory holding
/// draftsmith.toml.
pub async fn open_history(
    config: &HistoryConfig,
    root: &Path,
    project: Option<&str>,
    author: Option<&str>,
) -> Result<HistoryContext> {
    let store_path = if config.store.is_absolute() {
        config.store.clone()
    } else {
        root.join(&config.store)
    };

    let store = JsonFileStore::open(&store_path)
        .await
        .wrap_err_with(|| format!("Failed to open history at {}", store_path.display()))?;
    debug!(store = %store_path.display(), "history store ready");

    let window = i64::try_from(config.autosave_window_secs)
        .unwrap_or(i64::MAX)
        .min(i64::MAX / 1000);
    let mut service =
        VersionService::new(Arc::new(store)).with_autosave_window(Duration::seconds(window));
    if let Some(author) = author {
        service = service.with_author(author);
    }

    Ok(HistoryContext {
        service,
        project: project.unwrap_or(&config.project).to_string(),
        store_path,
    })
}

/// Read code from `path`, or from stdin when `path` is `-`.
pub fn read_code(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut code = String::new();
        std::io::stdin()
            .read_to_string(&mut code)
            .wrap_err("Failed to read code from stdin")?;
        return Ok(code);
    }

    std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_relative_store_resolves_against_root() {
        let temp = TempDir::new().unwrap();
        let config = HistoryConfig::default();

        let ctx = open_history(&config, temp.path(), Some("site"), None)
            .await
            .unwrap();
        assert_eq!(ctx.store_path, temp.path().join(".draftsmith/history.json"));
        assert_eq!(ctx.project, "site");

        ctx.service.create("site", "<p>x</p>", None, None).await.unwrap();
        assert!(ctx.store_path.exists());
    }

    #[tokio::test]
    async fn test_window_and_project_come_from_config() {
        let temp = TempDir::new().unwrap();
        let config = HistoryConfig {
            project: "landing".to_string(),
            autosave_window_secs: 60,
            ..HistoryConfig::default()
        };

        let ctx = open_history(&config, temp.path(), None, Some("sam"))
            .await
            .unwrap();
        assert_eq!(ctx.project, "landing");
        assert_eq!(ctx.service.autosave_window(), Duration::seconds(60));

        let v = ctx.service.create("landing", "a", None, None).await.unwrap();
        assert_eq!(v.author_id.as_deref(), Some("sam"));
    }
}
