use draftsmith_codegen::{builder::CodeBuilder, markup::to_jsx};
use draftsmith_core::TargetFormat;

use crate::{AuxiliaryFile, ComponentCodegen, ComponentSource, ExportOptions, ast::Import};

/// React function component (`.tsx`).
///
/// Without Tailwind the extracted css goes to `<Name>.css`, imported by the
/// component. With Tailwind the css is dropped.
pub struct React;

impl React {
    fn stylesheet_name(options: &ExportOptions) -> String {
        format!("{}.css", options.component_name)
    }
}

impl ComponentCodegen for React {
    fn format(&self) -> TargetFormat {
        TargetFormat::React
    }

    fn render(&self, source: &ComponentSource<'_>, options: &ExportOptions) -> String {
        let name = &options.component_name;
        let props = format!("{}Props", name);
        let jsx = to_jsx(source.body());

        let declaration = if options.include_type_annotations {
            format!("const {}: React.FC<{}> = () => {{", name, props)
        } else {
            format!("const {} = () => {{", name)
        };

        CodeBuilder::web()
            .node(&Import::new("react").default("React"))
            .when(!options.use_tailwind, |b| {
                b.node(&Import::new(format!("./{}", Self::stylesheet_name(options))))
            })
            .blank()
            .when(options.include_type_annotations, |b| {
                b.line(&format!("interface {} {{}}", props)).blank()
            })
            .block_with_close(&declaration, "};", |b| {
                b.block_with_close("return (", ");", |b| {
                    b.line("<>").raw(&jsx).line("</>")
                })
            })
            .blank()
            .line(&format!("export default {};", name))
            .build()
    }

    fn auxiliary_files(
        &self,
        source: &ComponentSource<'_>,
        options: &ExportOptions,
    ) -> Vec<AuxiliaryFile> {
        if options.use_tailwind {
            return Vec::new();
        }
        vec![AuxiliaryFile::new(
            Self::stylesheet_name(options),
            source.css(),
        )]
    }
}
