use std::{
    fs::{self, File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use fs2::FileExt;
use tracing::debug;
use uuid::Uuid;

use super::{Query, VersionStore, VersionTable};
use crate::{
    Clock, NewVersion, StoreError, StoreResult, SystemClock, Version, VersionId, VersionPatch,
};

/// A [`VersionStore`] persisted as a single JSON document.
///
/// Every call reads the file, so several handles (or several processes) may
/// share one path. Mutations run under an exclusive lock on a sibling
/// `.lock` file: the table is reloaded from disk, changed, written to a
/// uniquely named temp file, synced, and renamed over the original. A crash
/// mid-write leaves the previous contents intact, and the uniqueness check on
/// `(project_id, version_number)` always sees what is on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty if the file does not exist.
    ///
    /// An existing file is decoded once so a corrupt store fails here rather
    /// than on first use.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::open_with_clock(path, Arc::new(SystemClock)).await
    }

    pub async fn open_with_clock(
        path: impl Into<PathBuf>,
        clock: Arc<dyn Clock>,
    ) -> StoreResult<Self> {
        let store = Self {
            path: path.into(),
            clock,
        };
        let table = store.read().await?;
        debug!(path = %store.path.display(), rows = table.len(), "opened version store");
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> StoreResult<VersionTable> {
        let path = self.path.clone();
        blocking(move || load(&path)).await
    }

    /// Apply `change` to the on-disk table while holding the store lock.
    async fn mutate<T, F>(&self, change: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut VersionTable) -> StoreResult<T> + Send + 'static,
    {
        let path = self.path.clone();
        blocking(move || transact(&path, change)).await
    }
}

async fn blocking<T, F>(work: F) -> StoreResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> StoreResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| StoreError::Backend(format!("version store task failed: {e}")))?
}

fn io_error(path: &Path) -> impl Fn(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn load(path: &Path) -> StoreResult<VersionTable> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(VersionTable::new()),
        Err(source) => return Err(io_error(path)(source)),
    };

    if content.trim().is_empty() {
        return Ok(VersionTable::new());
    }

    serde_json::from_str(&content).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn transact<T>(
    path: &Path,
    change: impl FnOnce(&mut VersionTable) -> StoreResult<T>,
) -> StoreResult<T> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error(path))?;
    }

    let _lock = lock(path)?;
    let mut table = load(path)?;
    let out = change(&mut table)?;
    save(path, &table)?;
    Ok(out)
}

/// Take the exclusive store lock. Released when the returned handle drops.
fn lock(path: &Path) -> StoreResult<File> {
    let lock_path = path.with_extension("lock");
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .map_err(io_error(&lock_path))?;
    FileExt::lock_exclusive(&file).map_err(io_error(&lock_path))?;
    Ok(file)
}

fn save(path: &Path, table: &VersionTable) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(table)
        .map_err(|e| StoreError::Backend(format!("failed to encode versions: {e}")))?;

    let tmp = temp_path(path);
    let written = File::create(&tmp)
        .and_then(|mut file| {
            file.write_all(json.as_bytes())?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&tmp, path));

    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    written.map_err(io_error(path))
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "versions".to_string());
    path.with_file_name(format!(".{name}.{}.tmp", Uuid::new_v4().simple()))
}

#[async_trait]
impl VersionStore for JsonFileStore {
    async fn select(&self, query: &Query) -> StoreResult<Vec<Version>> {
        Ok(self.read().await?.select(query))
    }

    async fn count(&self, query: &Query) -> StoreResult<usize> {
        Ok(self.read().await?.count(query))
    }

    async fn insert(&self, record: NewVersion) -> StoreResult<Version> {
        let now = self.clock.now();
        self.mutate(move |table| table.insert(record, now)).await
    }

    async fn update(&self, id: &VersionId, patch: VersionPatch) -> StoreResult<Version> {
        let id = *id;
        self.mutate(move |table| table.update(&id, patch)).await
    }

    async fn delete(&self, id: &VersionId) -> StoreResult<()> {
        let target = *id;
        let removed = self.mutate(move |table| Ok(table.delete(&target))).await?;
        if !removed {
            debug!(%id, "delete of absent version");
        }
        Ok(())
    }
}
