use std::{io::IsTerminal, path::PathBuf};

use clap::Args;
use dialoguer::{Select, theme::ColorfulTheme};
use draftsmith_core::GeneratedFile;
use draftsmith_export::TargetFormat;
use draftsmith_manifest::{Manifest, ManifestTemplate};
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::reports::{InitReport, Report, TerminalOutput};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create draftsmith.toml in
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Default export format (prompts when omitted in a terminal)
    #[arg(short, long)]
    pub format: Option<TargetFormat>,

    /// History project name
    #[arg(short, long)]
    pub project: Option<String>,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let format = match self.format {
            Some(format) => format,
            None if std::io::stdin().is_terminal() => Self::prompt_format()?,
            None => TargetFormat::default(),
        };

        let manifest = self.manifest(format);
        let template = ManifestTemplate::new(manifest).unwrap_or_exit();
        let path = template.path(&self.dir);
        let result = template
            .write(&self.dir)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

        InitReport { path, result }.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn manifest(&self, format: TargetFormat) -> Manifest {
        let mut manifest = Manifest::default();
        manifest.export.format = format;
        if let Some(project) = &self.project {
            manifest.history.project = project.clone();
        }
        manifest
    }

    fn prompt_format() -> Result<TargetFormat> {
        let formats = TargetFormat::ALL;
        let labels: Vec<&str> = formats.iter().map(TargetFormat::as_str).collect();
        let default = formats
            .iter()
            .position(|f| *f == TargetFormat::default())
            .unwrap_or(0);

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Default export format")
            .items(&labels)
            .default(default)
            .interact()
            .wrap_err("Failed to get format selection")?;

        Ok(formats[selection])
    }
}
