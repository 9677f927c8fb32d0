use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use draftsmith_history::{Clock, Version, VersionId};
use eyre::{Context, Result};
use tracing::info;

use super::load_manifest;
use crate::{
    ops::{self, HistoryContext},
    reports::{
        ComparisonReport, Output, Report, TerminalOutput, VersionAction, VersionListReport,
        VersionReport,
    },
};

#[derive(Args)]
pub struct HistoryCommand {
    /// Project whose history to use (overrides draftsmith.toml)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    #[command(subcommand)]
    pub action: HistoryAction,
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List versions, newest first
    List {
        /// Show at most this many versions
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Save a file as a new version
    Save {
        /// File to save (`-` reads stdin)
        file: PathBuf,

        /// Note for the version (defaults to "Version <n>")
        #[arg(short, long)]
        message: Option<String>,

        /// Prompt that produced the code
        #[arg(long)]
        prompt: Option<String>,

        /// Author recorded on the version
        #[arg(long)]
        author: Option<String>,
    },

    /// Save a file, folding it into a version saved in the last few minutes
    Autosave {
        /// File to save (`-` reads stdin)
        file: PathBuf,

        /// Prompt that produced the code
        #[arg(long)]
        prompt: Option<String>,
    },

    /// Show one version
    Show {
        id: VersionId,

        /// Print the version's code
        #[arg(long)]
        code: bool,
    },

    /// Save a copy of an earlier version as the newest version
    Revert { id: VersionId },

    /// Permanently delete a version
    Delete { id: VersionId },

    /// Compare two versions line by line
    Diff { from: VersionId, to: VersionId },
}

impl HistoryCommand {
    pub async fn run(&self, config: Option<&Path>) -> Result<()> {
        let (manifest, root) = load_manifest(config);
        let author = match &self.action {
            HistoryAction::Save { author, .. } => author.as_deref(),
            _ => None,
        };
        let ctx =
            ops::open_history(&manifest.history, &root, self.project.as_deref(), author).await?;
        info!(project = %ctx.project, store = %ctx.store_path.display(), "using history");

        let mut out = TerminalOutput::new();
        self.execute(&ctx, &mut out).await
    }

    async fn execute(&self, ctx: &HistoryContext, out: &mut dyn Output) -> Result<()> {
        let service = &ctx.service;
        let now = service.clock().now();

        match &self.action {
            HistoryAction::List { limit } => {
                let versions = match limit {
                    Some(limit) => service.list_page(&ctx.project, *limit).await,
                    None => service.list(&ctx.project).await,
                }
                .wrap_err("Failed to list versions")?;

                VersionListReport {
                    project: ctx.project.clone(),
                    versions,
                    now,
                }
                .render(out);
            }
            HistoryAction::Save {
                file,
                message,
                prompt,
                ..
            } => {
                let code = ops::read_code(file)?;
                let version = service
                    .create(&ctx.project, &code, message.as_deref(), prompt.as_deref())
                    .await
                    .wrap_err("Failed to save version")?;
                version_report(VersionAction::Saved, version, now, out);
            }
            HistoryAction::Autosave { file, prompt } => {
                let code = ops::read_code(file)?;
                let version = service
                    .auto_save(&ctx.project, &code, prompt.as_deref())
                    .await
                    .wrap_err("Failed to autosave")?;
                version_report(VersionAction::AutoSaved, version, now, out);
            }
            HistoryAction::Show { id, code } => {
                let version = service.get(id).await?;
                VersionReport {
                    action: VersionAction::Shown,
                    version,
                    now,
                    show_code: *code,
                }
                .render(out);
            }
            HistoryAction::Revert { id } => {
                let version = service
                    .revert(id)
                    .await
                    .wrap_err_with(|| format!("Failed to revert to {id}"))?;
                version_report(VersionAction::Reverted, version, now, out);
            }
            HistoryAction::Delete { id } => {
                service.delete(id).await?;
                out.preformatted(&format!("Deleted version {id}"));
            }
            HistoryAction::Diff { from, to } => {
                let comparison = service.compare(from, to).await?;
                ComparisonReport { comparison }.render(out);
            }
        }

        Ok(())
    }
}

fn version_report(
    action: VersionAction,
    version: Version,
    now: DateTime<Utc>,
    out: &mut dyn Output,
) {
    VersionReport {
        action,
        version,
        now,
        show_code: false,
    }
    .render(out);
}
