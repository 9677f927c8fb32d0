use draftsmith_codegen::builder::CodeBuilder;
use draftsmith_core::TargetFormat;

use crate::{ComponentCodegen, ComponentSource, ExportOptions};

/// Vue single-file component with the css embedded in a `<style>` block.
pub struct Vue;

impl ComponentCodegen for Vue {
    fn format(&self) -> TargetFormat {
        TargetFormat::Vue
    }

    fn render(&self, source: &ComponentSource<'_>, options: &ExportOptions) -> String {
        let style_open = if options.use_scoped_styles {
            "<style scoped>"
        } else {
            "<style>"
        };

        CodeBuilder::web()
            .line("<template>")
            .raw(source.body())
            .line("</template>")
            .blank()
            .line("<script setup>")
            .line("</script>")
            .blank()
            .line(style_open)
            .text(source.css().trim())
            .line("</style>")
            .build()
    }
}
