//! Export entry point and format dispatch.

use draftsmith_core::TargetFormat;
use tracing::debug;

use crate::{
    ComponentCodegen, ComponentSource, ExportOptions, ExportResult,
    targets::{Angular, Html, React, Svelte, Vue},
};

/// Create the generator for a target format.
pub fn codegen_for(format: TargetFormat) -> Box<dyn ComponentCodegen> {
    match format {
        TargetFormat::Html => Box::new(Html),
        TargetFormat::React => Box::new(React),
        TargetFormat::Vue => Box::new(Vue),
        TargetFormat::Angular => Box::new(Angular),
        TargetFormat::Svelte => Box::new(Svelte),
    }
}

/// Convert `source` into the component format selected by `options`.
///
/// Never fails: malformed markup is rewritten as-is.
pub fn export(source: &str, options: &ExportOptions) -> ExportResult {
    let component = ComponentSource::new(source);
    let codegen = codegen_for(options.target_format);

    let result = ExportResult {
        primary_file_content: codegen.render(&component, options),
        primary_file_name: options.primary_file_name(),
        auxiliary_files: codegen.auxiliary_files(&component, options),
    };

    debug!(
        format = %options.target_format,
        component = %options.component_name,
        classes = component.parts.class_names.len(),
        files = result.file_count(),
        "exported component"
    );

    result
}
