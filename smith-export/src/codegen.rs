//! Per-framework generator trait.

use draftsmith_codegen::markup::SourceParts;
use draftsmith_core::TargetFormat;

use crate::{AuxiliaryFile, ExportOptions};

/// An HTML source together with the pieces extracted from it.
#[derive(Debug, Clone)]
pub struct ComponentSource<'a> {
    /// The source exactly as received.
    pub raw: &'a str,
    /// Extracted css, template body and class names.
    pub parts: SourceParts,
}

impl<'a> ComponentSource<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            parts: SourceParts::extract(raw),
        }
    }

    pub fn css(&self) -> &str {
        &self.parts.css
    }

    pub fn body(&self) -> &str {
        &self.parts.body
    }
}

/// Trait for framework-specific component generators.
///
/// Implement this trait to add a new export target. File naming is owned by
/// the exporter: the primary file is always `component_name + extension`.
pub trait ComponentCodegen {
    /// Format this generator produces
    fn format(&self) -> TargetFormat;

    /// Render the primary component file
    fn render(&self, source: &ComponentSource<'_>, options: &ExportOptions) -> String;

    /// Files written next to the primary file.
    ///
    /// Default implementation produces none.
    fn auxiliary_files(
        &self,
        _source: &ComponentSource<'_>,
        _options: &ExportOptions,
    ) -> Vec<AuxiliaryFile> {
        Vec::new()
    }
}
