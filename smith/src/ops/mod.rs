//! Core operations.
//!
//! Business logic for smith commands, separated from argument parsing and
//! output rendering.

pub mod export;
pub mod history;

pub use export::{ExportRequest, default_component_name, export};
pub use history::{HistoryContext, open_history, read_code};
