mod completions;
mod export;
mod history;
mod init;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use draftsmith_manifest::{DraftsmithToml, Manifest};
use export::ExportCommand;
use eyre::Result;
use history::HistoryCommand;
use init::InitCommand;

use crate::logging::{LogConfig, LogFormat};

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for draftsmith_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "smith")]
#[command(version)]
#[command(about = "Export HTML designs to framework components and track their versions")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to draftsmith.toml (defaults to ./draftsmith.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    log_format: LogFormat,
}

impl Cli {
    pub fn log_config(&self) -> LogConfig {
        LogConfig::from_verbosity(self.verbose, self.quiet).with_format(self.log_format)
    }

    pub async fn run(&self) -> Result<()> {
        let config = self.config.as_deref();
        match &self.command {
            Commands::Export(cmd) => cmd.run(config),
            Commands::History(cmd) => cmd.run(config).await,
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an HTML file into a component
    Export(ExportCommand),

    /// Save, browse and restore versions of a project
    History(HistoryCommand),

    /// Create a draftsmith.toml in the current directory
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Load the manifest and the directory its relative paths resolve against.
///
/// An explicit `--config` must exist; otherwise a draftsmith.toml in the
/// current directory is used if there is one, and defaults if not.
pub(crate) fn load_manifest(config: Option<&Path>) -> (Manifest, PathBuf) {
    match config {
        Some(path) => {
            let file = DraftsmithToml::open(path).unwrap_or_exit();
            (file.manifest().clone(), file.root().to_path_buf())
        }
        None => match DraftsmithToml::discover(".").unwrap_or_exit() {
            Some(file) => (file.manifest().clone(), file.root().to_path_buf()),
            None => (Manifest::default(), PathBuf::from(".")),
        },
    }
}
