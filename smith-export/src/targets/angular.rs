use draftsmith_codegen::builder::{CodeBuilder, CodeFragment};
use draftsmith_core::TargetFormat;

use crate::{AuxiliaryFile, ComponentCodegen, ComponentSource, ExportOptions, ast::Import};

const COMPONENT_SUFFIX: &str = "component";

/// Angular component with an inline template and an external stylesheet.
///
/// The stylesheet is always produced, Tailwind or not.
pub struct Angular;

/// Selector token for a component name: lowercased, trailing `component`
/// removed (`"HeroComponent"` -> `"hero"`).
///
/// A name that is only the suffix yields an empty token, so `Component`
/// renders the selector `app-` and the stylesheet `.component.css`.
pub fn angular_selector(component_name: &str) -> String {
    let lower = component_name.to_lowercase();
    match lower.strip_suffix(COMPONENT_SUFFIX) {
        Some(stripped) => stripped.to_string(),
        None => lower,
    }
}

impl Angular {
    fn stylesheet_name(options: &ExportOptions) -> String {
        format!(
            "{}.component.css",
            angular_selector(&options.component_name)
        )
    }
}

/// Escape characters that would terminate or interpolate a template literal.
fn escape_template_literal(body: &str) -> String {
    body.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

impl ComponentCodegen for Angular {
    fn format(&self) -> TargetFormat {
        TargetFormat::Angular
    }

    fn render(&self, source: &ComponentSource<'_>, options: &ExportOptions) -> String {
        let selector = angular_selector(&options.component_name);
        let decorator = CodeFragment::block(
            "@Component({",
            vec![
                CodeFragment::line(format!("selector: \"app-{}\",", selector)),
                CodeFragment::line("template: `"),
                CodeFragment::raw(format!("{}`,", escape_template_literal(source.body()))),
                CodeFragment::line(format!(
                    "styleUrls: [\"./{}\"],",
                    Self::stylesheet_name(options)
                )),
            ],
            Some("})".to_string()),
        );

        let mut builder = CodeBuilder::web()
            .node(&Import::new("@angular/core").named("Component"))
            .blank();
        builder.apply_fragment(decorator);
        builder
            .line(&format!(
                "export class {}Component {{}}",
                options.component_name
            ))
            .build()
    }

    fn auxiliary_files(
        &self,
        source: &ComponentSource<'_>,
        options: &ExportOptions,
    ) -> Vec<AuxiliaryFile> {
        vec![AuxiliaryFile::new(
            Self::stylesheet_name(options),
            source.css(),
        )]
    }
}
