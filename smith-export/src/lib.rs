//! HTML to framework component exporter for draftsmith.
//!
//! Converts a single HTML/CSS/JS source into one of five component formats.
//! Export is a pure function of `(source, options)`: no I/O happens until the
//! result is handed to [`download_files`] together with a [`FileSink`].
//!
//! ```
//! use draftsmith_export::{ExportOptions, TargetFormat, export};
//!
//! let options = ExportOptions::new(TargetFormat::React, "Hero");
//! let result = export(r#"<div class="a"><img src="x"></div>"#, &options);
//!
//! assert_eq!(result.primary_file_name, "Hero.tsx");
//! assert!(result.primary_file_content.contains(r#"<img src="x" />"#));
//! ```
//!
//! # Generated Output
//!
//! | format | primary file | auxiliary files |
//! |---|---|---|
//! | html | `<Name>.html` | none |
//! | react | `<Name>.tsx` | `<Name>.css` unless Tailwind is used |
//! | vue | `<Name>.vue` | none |
//! | angular | `<Name>.ts` | `<selector>.component.css` |
//! | svelte | `<Name>.svelte` | none |

mod codegen;
mod download;
mod exporter;
mod options;
mod result;

pub mod ast;
pub mod targets;

pub use codegen::{ComponentCodegen, ComponentSource};
pub use download::{DownloadReport, FailedSave, download_files};
pub use draftsmith_core::{FileSink, TargetFormat};
pub use exporter::{codegen_for, export};
pub use options::ExportOptions;
pub use result::{AuxiliaryFile, ExportResult};
