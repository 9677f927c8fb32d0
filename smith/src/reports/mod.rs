//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod export;
mod history;
mod init;
mod output;

pub use export::ExportReport;
pub use history::{ComparisonReport, VersionAction, VersionListReport, VersionReport};
pub use init::InitReport;
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Output, Report, TerminalOutput};
