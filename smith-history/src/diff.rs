use serde::Serialize;

use crate::Version;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
}

/// One line reported by [`positional_diff`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineChange {
    pub kind: ChangeKind,
    /// 1-based position in the longer of the two texts.
    pub line_number: usize,
    pub content: String,
}

/// Compare two texts line by line at equal positions.
///
/// Lines are paired by index, not aligned. A position where only the new
/// text has content is an addition, one where only the old text has content
/// is a removal, and one where both differ yields a removal followed by an
/// addition. Missing lines past the end of the shorter text count as empty.
///
/// Accurate for appends and truncations; an insertion in the middle shifts
/// every following line and is reported as a change on each of them.
///
/// ```
/// use draftsmith_history::{ChangeKind, positional_diff};
///
/// let changes = positional_diff("a\nb", "a\nc\nd");
/// assert_eq!(changes.len(), 3);
/// assert_eq!(changes[0].kind, ChangeKind::Removed);
/// assert_eq!(changes[2].content, "d");
/// ```
pub fn positional_diff(from: &str, to: &str) -> Vec<LineChange> {
    let old: Vec<&str> = from.split('\n').collect();
    let new: Vec<&str> = to.split('\n').collect();
    let mut changes = Vec::new();

    for i in 0..old.len().max(new.len()) {
        let before = old.get(i).copied().unwrap_or("");
        let after = new.get(i).copied().unwrap_or("");
        if before == after {
            continue;
        }

        let line_number = i + 1;
        if !before.is_empty() {
            changes.push(LineChange {
                kind: ChangeKind::Removed,
                line_number,
                content: before.to_string(),
            });
        }
        if !after.is_empty() {
            changes.push(LineChange {
                kind: ChangeKind::Added,
                line_number,
                content: after.to_string(),
            });
        }
    }

    changes
}

/// The positional difference between two versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionComparison {
    pub from_version: Version,
    pub to_version: Version,
    pub added_line_count: usize,
    pub removed_line_count: usize,
    pub changes: Vec<LineChange>,
}

impl VersionComparison {
    pub fn between(from_version: Version, to_version: Version) -> Self {
        let changes = positional_diff(&from_version.code, &to_version.code);
        let added_line_count = changes
            .iter()
            .filter(|c| c.kind == ChangeKind::Added)
            .count();
        let removed_line_count = changes.len() - added_line_count;

        Self {
            from_version,
            to_version,
            added_line_count,
            removed_line_count,
            changes,
        }
    }

    /// Whether the two versions have identical code.
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}
