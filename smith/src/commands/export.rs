use std::path::{Path, PathBuf};

use clap::Args;
use draftsmith_core::Overwrite;
use draftsmith_export::{ExportOptions, TargetFormat};
use draftsmith_manifest::{ExportConfig, validate_component_name};
use eyre::{Result, bail};

use super::load_manifest;
use crate::{
    ops::{self, ExportRequest},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExportCommand {
    /// HTML file to convert
    pub input: PathBuf,

    /// Target format: html, react, vue, angular or svelte
    #[arg(short, long)]
    pub format: Option<TargetFormat>,

    /// Component name (defaults to the input file name in PascalCase)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Styling is done with Tailwind classes; emit no stylesheet
    #[arg(long)]
    pub tailwind: bool,

    /// Omit the typed props interface (React)
    #[arg(long)]
    pub no_types: bool,

    /// Use a global rather than scoped style block (Vue)
    #[arg(long)]
    pub unscoped: bool,

    /// Output directory (overrides draftsmith.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the generated files instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Leave files that already exist untouched
    #[arg(long)]
    pub keep_existing: bool,
}

impl ExportCommand {
    pub fn run(&self, config: Option<&Path>) -> Result<()> {
        let (manifest, root) = load_manifest(config);
        let defaults = &manifest.export;

        let options = self.options(defaults)?;
        let output_dir = match &self.output {
            Some(dir) => dir.clone(),
            None => root.join(&defaults.output),
        };

        let report = ops::export(ExportRequest {
            input: &self.input,
            options,
            output_dir: &output_dir,
            dry_run: self.dry_run,
            overwrite: if self.keep_existing {
                Overwrite::IfMissing
            } else {
                Overwrite::Always
            },
        })?;

        report.render(&mut TerminalOutput::new());
        if report.is_dry_run() {
            return Ok(());
        }

        let failed = report.failure_count();
        if failed > 0 {
            bail!("{failed} file(s) could not be saved");
        }
        Ok(())
    }

    /// Flags win over draftsmith.toml; the name falls back to the input file.
    fn options(&self, defaults: &ExportConfig) -> Result<ExportOptions> {
        let name = match &self.name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => ops::default_component_name(&self.input, &defaults.component_name),
        };
        if let Some(reason) = validate_component_name(&name) {
            bail!("invalid component name '{name}': {reason}");
        }

        Ok(ExportOptions::new(self.format.unwrap_or(defaults.format), name)
            .tailwind(self.tailwind || defaults.tailwind)
            .type_annotations(!self.no_types && defaults.type_annotations)
            .scoped_styles(!self.unscoped && defaults.scoped_styles))
    }
}
