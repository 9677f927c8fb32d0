//! Saving an export result through a [`FileSink`].

use draftsmith_core::{FileSink, WriteResult};
use tracing::{debug, warn};

use crate::ExportResult;

/// A file that could not be saved.
#[derive(Debug)]
pub struct FailedSave {
    pub name: String,
    pub error: std::io::Error,
}

/// Outcome of [`download_files`], one entry per file.
#[derive(Debug, Default)]
pub struct DownloadReport {
    /// Files written by the sink
    pub saved: Vec<String>,
    /// Files the sink left untouched (already present)
    pub skipped: Vec<String>,
    /// Files whose save failed
    pub failed: Vec<FailedSave>,
}

impl DownloadReport {
    /// Whether every file was saved or intentionally skipped.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Save the primary file and then each auxiliary file.
///
/// Every save is independent: a failure is recorded and the remaining files
/// are still attempted. Files saved before a failure are left in place.
pub fn download_files(result: &ExportResult, sink: &dyn FileSink) -> DownloadReport {
    let mut report = DownloadReport::default();

    for (name, content) in result.files() {
        match sink.save(name, content) {
            Ok(WriteResult::Written) => {
                debug!(file = name, bytes = content.len(), "saved export file");
                report.saved.push(name.to_string());
            }
            Ok(WriteResult::Skipped) => {
                debug!(file = name, "export file already exists, skipped");
                report.skipped.push(name.to_string());
            }
            Err(error) => {
                warn!(file = name, %error, "failed to save export file");
                report.failed.push(FailedSave {
                    name: name.to_string(),
                    error,
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, io};

    use super::*;
    use crate::AuxiliaryFile;

    /// Sink that records calls and fails for one file name.
    struct FlakySink {
        fail_on: &'static str,
        calls: RefCell<Vec<String>>,
    }

    impl FileSink for FlakySink {
        fn save(&self, name: &str, _content: &str) -> io::Result<WriteResult> {
            self.calls.borrow_mut().push(name.to_string());
            if name == self.fail_on {
                Err(io::Error::new(io::ErrorKind::Interrupted, "cancelled"))
            } else {
                Ok(WriteResult::Written)
            }
        }
    }

    fn result() -> ExportResult {
        ExportResult {
            primary_file_content: "export class NavComponent {}".to_string(),
            primary_file_name: "Nav.ts".to_string(),
            auxiliary_files: vec![
                AuxiliaryFile::new("nav.component.css", ""),
                AuxiliaryFile::new("nav.notes.md", "notes"),
            ],
        }
    }

    #[test]
    fn test_failure_does_not_abort_later_saves() {
        let sink = FlakySink {
            fail_on: "Nav.ts",
            calls: RefCell::new(Vec::new()),
        };

        let report = download_files(&result(), &sink);

        assert_eq!(
            *sink.calls.borrow(),
            ["Nav.ts", "nav.component.css", "nav.notes.md"]
        );
        assert_eq!(report.saved, ["nav.component.css", "nav.notes.md"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].name, "Nav.ts");
        assert!(!report.is_complete());
    }

    #[test]
    fn test_all_saved() {
        let sink = FlakySink {
            fail_on: "",
            calls: RefCell::new(Vec::new()),
        };

        let report = download_files(&result(), &sink);

        assert_eq!(report.saved.len(), 3);
        assert!(report.is_complete());
    }
}
