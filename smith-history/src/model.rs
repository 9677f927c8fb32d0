use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque version identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionId(Uuid);

impl VersionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for VersionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VersionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A saved snapshot of a project's code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub id: VersionId,
    pub project_id: String,
    pub code: String,
    /// Prompt that generated this code, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_text: Option<String>,
    /// Per-project sequence number, starting at 1.
    pub version_number: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Version {
    /// Note for display, falling back to `Version {n}`.
    pub fn label(&self) -> String {
        self.note
            .clone()
            .unwrap_or_else(|| format!("Version {}", self.version_number))
    }
}

/// Insert payload. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVersion {
    pub project_id: String,
    pub code: String,
    pub prompt_text: Option<String>,
    pub version_number: u32,
    pub author_id: Option<String>,
    pub note: Option<String>,
}

impl NewVersion {
    pub(crate) fn into_version(self, id: VersionId, created_at: DateTime<Utc>) -> Version {
        Version {
            id,
            project_id: self.project_id,
            code: self.code,
            prompt_text: self.prompt_text,
            version_number: self.version_number,
            created_at,
            author_id: self.author_id,
            note: self.note,
        }
    }
}

/// Fields an update may overwrite. `None` leaves the stored value as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionPatch {
    pub code: Option<String>,
    pub prompt_text: Option<String>,
}

impl VersionPatch {
    pub(crate) fn apply(self, version: &mut Version) {
        if let Some(code) = self.code {
            version.code = code;
        }
        if let Some(prompt_text) = self.prompt_text {
            version.prompt_text = Some(prompt_text);
        }
    }
}
