use draftsmith_core::TargetFormat;
use serde::{Deserialize, Serialize};

/// Options for a single export call.
///
/// Callers are expected to default an empty `component_name` before
/// exporting; the exporter uses the name verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub target_format: TargetFormat,
    pub component_name: String,
    /// Styling comes from Tailwind classes, so no stylesheet is emitted (React).
    pub use_tailwind: bool,
    /// Emit a typed props interface (React).
    pub include_type_annotations: bool,
    /// Scope the embedded stylesheet to the component (Vue).
    pub use_scoped_styles: bool,
}

impl ExportOptions {
    pub fn new(target_format: TargetFormat, component_name: impl Into<String>) -> Self {
        Self {
            target_format,
            component_name: component_name.into(),
            use_tailwind: false,
            include_type_annotations: true,
            use_scoped_styles: true,
        }
    }

    pub fn tailwind(mut self, enabled: bool) -> Self {
        self.use_tailwind = enabled;
        self
    }

    pub fn type_annotations(mut self, enabled: bool) -> Self {
        self.include_type_annotations = enabled;
        self
    }

    pub fn scoped_styles(mut self, enabled: bool) -> Self {
        self.use_scoped_styles = enabled;
        self
    }

    /// Name of the primary output file.
    pub fn primary_file_name(&self) -> String {
        format!(
            "{}{}",
            self.component_name,
            self.target_format.extension()
        )
    }
}
