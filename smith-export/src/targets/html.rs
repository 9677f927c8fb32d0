use draftsmith_core::TargetFormat;

use crate::{ComponentCodegen, ComponentSource, ExportOptions};

/// Plain HTML export: the source is passed through untouched.
pub struct Html;

impl ComponentCodegen for Html {
    fn format(&self) -> TargetFormat {
        TargetFormat::Html
    }

    fn render(&self, source: &ComponentSource<'_>, _options: &ExportOptions) -> String {
        source.raw.to_string()
    }
}
