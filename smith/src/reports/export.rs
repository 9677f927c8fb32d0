//! Export command report.

use std::path::PathBuf;

use draftsmith_export::{DownloadReport, ExportResult, TargetFormat};
use draftsmith_history::get_code_size;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct ExportReport {
    pub format: TargetFormat,
    pub component_name: String,
    pub output_dir: PathBuf,
    pub result: ExportResult,
    /// `None` for a dry run.
    pub download: Option<DownloadReport>,
}

impl ExportReport {
    pub fn is_dry_run(&self) -> bool {
        self.download.is_none()
    }

    /// Number of files that could not be saved.
    pub fn failure_count(&self) -> usize {
        self.download.as_ref().map_or(0, |d| d.failed.len())
    }

    fn size_of(&self, name: &str) -> String {
        self.result
            .files()
            .find(|(file, _)| *file == name)
            .map(|(_, content)| get_code_size(content))
            .unwrap_or_default()
    }
}

impl Report for ExportReport {
    fn render(&self, out: &mut dyn Output) {
        let Some(download) = &self.download else {
            for (name, content) in self.result.files() {
                out.divider(name);
                out.preformatted(content);
            }
            return;
        };

        out.title(&format!("{} ({})", self.component_name, self.format));
        out.key_value("Output", &self.output_dir.display().to_string());
        out.newline();

        if !download.saved.is_empty() {
            out.section("Written");
            for name in &download.saved {
                out.added_item(&format!("{} ({})", name, self.size_of(name)));
            }
        }

        if !download.skipped.is_empty() {
            out.section("Kept (already exists)");
            for name in &download.skipped {
                out.list_item(name);
            }
        }

        for failed in &download.failed {
            out.warning(&format!("failed to save {}: {}", failed.name, failed.error));
        }
    }
}
