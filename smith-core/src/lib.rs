//! Core utilities and types for draftsmith.
//!
//! This crate provides fundamental types and utilities used across
//! the draftsmith workspace.

mod file;
mod format;
mod utils;

// File operations
pub use file::{DirectorySink, FileSink, GeneratedFile, Overwrite, WriteResult};
// Fundamental types
pub use format::TargetFormat;
// String utilities
pub use utils::to_pascal_case;
