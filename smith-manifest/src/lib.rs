//! Project configuration for draftsmith, read from `draftsmith.toml`.
//!
//! Every key is optional. Unknown keys and invalid values are reported as
//! [`miette`] diagnostics pointing into the file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;
mod template;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use file::{DraftsmithToml, MANIFEST_FILE};
pub use manifest::{ExportConfig, HistoryConfig, Manifest};
pub use template::ManifestTemplate;
pub use validate::validate_component_name;
