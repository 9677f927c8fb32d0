//! History command reports.

use chrono::{DateTime, Utc};
use draftsmith_history::{
    ChangeKind, Version, VersionComparison, format_version_date, get_code_size,
};

use super::output::{Output, Report};

/// Versions of one project, newest first.
#[derive(Debug)]
pub struct VersionListReport {
    pub project: String,
    pub versions: Vec<Version>,
    pub now: DateTime<Utc>,
}

impl Report for VersionListReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&format!("History of {}", self.project));

        if self.versions.is_empty() {
            out.preformatted("No versions saved yet.");
            return;
        }

        for v in &self.versions {
            out.list_item(&format!(
                "v{}  {}  {}  {}  {}",
                v.version_number,
                v.label(),
                format_version_date(v.created_at, self.now),
                get_code_size(&v.code),
                v.id
            ));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionAction {
    Saved,
    AutoSaved,
    Reverted,
    Shown,
}

/// A single version, after an action or on request.
#[derive(Debug)]
pub struct VersionReport {
    pub action: VersionAction,
    pub version: Version,
    pub now: DateTime<Utc>,
    pub show_code: bool,
}

impl Report for VersionReport {
    fn render(&self, out: &mut dyn Output) {
        let v = &self.version;
        let heading = match self.action {
            VersionAction::Saved => format!("Saved version {}", v.version_number),
            VersionAction::AutoSaved => format!("Auto-saved into version {}", v.version_number),
            VersionAction::Reverted => format!("Reverted as version {}", v.version_number),
            VersionAction::Shown => format!("Version {}", v.version_number),
        };
        out.title(&heading);

        out.key_value("Id", &v.id.to_string());
        out.key_value("Project", &v.project_id);
        out.key_value("Note", &v.label());
        out.key_value("Created", &format_version_date(v.created_at, self.now));
        out.key_value("Size", &get_code_size(&v.code));
        if let Some(prompt) = &v.prompt_text {
            out.key_value("Prompt", prompt);
        }
        if let Some(author) = &v.author_id {
            out.key_value("Author", author);
        }

        if self.show_code {
            out.newline();
            out.divider("code");
            out.preformatted(&v.code);
        }
    }
}

/// Line-level difference between two versions.
#[derive(Debug)]
pub struct ComparisonReport {
    pub comparison: VersionComparison,
}

impl Report for ComparisonReport {
    fn render(&self, out: &mut dyn Output) {
        let c = &self.comparison;
        out.title(&format!(
            "v{} -> v{}",
            c.from_version.version_number, c.to_version.version_number
        ));
        out.key_value("Added", &c.added_line_count.to_string());
        out.key_value("Removed", &c.removed_line_count.to_string());

        if c.is_unchanged() {
            out.preformatted("No differences.");
            return;
        }

        out.newline();
        for change in &c.changes {
            let line = format!("{:>4} {}", change.line_number, change.content);
            match change.kind {
                ChangeKind::Added => out.added_item(&line),
                ChangeKind::Removed => out.removed_item(&line),
            }
        }
    }
}
