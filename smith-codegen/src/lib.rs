//! Shared code generation utilities for draftsmith.
//!
//! This crate provides framework-agnostic building blocks used by the
//! component exporters in `draftsmith-export`.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`markup`] - Regex-based HTML extraction and JSX rewriting

pub mod builder;
pub mod markup;
