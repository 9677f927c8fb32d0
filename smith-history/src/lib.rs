//! Version history for draftsmith projects.
//!
//! A project's history is an append-mostly log of code snapshots. Versions
//! are created on explicit save, on revert (which appends a copy rather than
//! rewriting history) and on autosave. Autosave is the one path that edits a
//! version in place: repeated autosaves inside the coalescing window update
//! the most recent version instead of appending.
//!
//! Persistence goes through the [`VersionStore`] trait, a small query
//! interface (equality filters, timestamp threshold, ordering, limit, count).
//! [`MemoryStore`] and [`JsonFileStore`] implement it.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use draftsmith_history::{MemoryStore, VersionService};
//!
//! # async fn demo() -> draftsmith_history::Result<()> {
//! let service = VersionService::new(Arc::new(MemoryStore::new()));
//! let first = service.create("landing", "<p>v1</p>", None, None).await?;
//! service.create("landing", "<p>v2</p>", None, None).await?;
//!
//! let reverted = service.revert(&first.id).await?;
//! assert_eq!(reverted.version_number, 3);
//! # Ok(())
//! # }
//! ```

mod clock;
mod diff;
mod error;
mod format;
mod model;
mod service;

pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use diff::{ChangeKind, LineChange, VersionComparison, positional_diff};
pub use error::{HistoryError, Result, StoreError, StoreResult};
pub use format::{format_version_date, get_code_size};
pub use model::{NewVersion, Version, VersionId, VersionPatch};
pub use service::{AUTOSAVE_NOTE, DEFAULT_AUTOSAVE_WINDOW_SECS, VersionService};
pub use store::{JsonFileStore, MemoryStore, Query, VersionField, VersionStore};
