use draftsmith_codegen::builder::CodeBuilder;
use draftsmith_core::TargetFormat;

use crate::{ComponentCodegen, ComponentSource, ExportOptions};

/// Svelte component: empty script header, markup, trailing style block.
pub struct Svelte;

impl ComponentCodegen for Svelte {
    fn format(&self) -> TargetFormat {
        TargetFormat::Svelte
    }

    fn render(&self, source: &ComponentSource<'_>, _options: &ExportOptions) -> String {
        CodeBuilder::web()
            .line("<script>")
            .line("</script>")
            .blank()
            .raw(source.body())
            .blank()
            .line("<style>")
            .text(source.css().trim())
            .line("</style>")
            .build()
    }
}
