//! Export target formats.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Framework component formats an HTML source can be exported to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    /// Plain HTML (passthrough)
    Html,
    /// React function component (TSX)
    #[default]
    React,
    /// Vue single-file component
    Vue,
    /// Angular component with inline template
    Angular,
    /// Svelte component
    Svelte,
}

impl TargetFormat {
    /// Every supported format, in menu order.
    pub const ALL: [TargetFormat; 5] = [
        TargetFormat::Html,
        TargetFormat::React,
        TargetFormat::Vue,
        TargetFormat::Angular,
        TargetFormat::Svelte,
    ];

    /// Returns the format identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetFormat::Html => "html",
            TargetFormat::React => "react",
            TargetFormat::Vue => "vue",
            TargetFormat::Angular => "angular",
            TargetFormat::Svelte => "svelte",
        }
    }

    /// File extension (with leading dot) of the primary output file.
    pub fn extension(&self) -> &'static str {
        match self {
            TargetFormat::Html => ".html",
            TargetFormat::React => ".tsx",
            TargetFormat::Vue => ".vue",
            TargetFormat::Angular => ".ts",
            TargetFormat::Svelte => ".svelte",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(TargetFormat::Html),
            "react" | "tsx" => Ok(TargetFormat::React),
            "vue" => Ok(TargetFormat::Vue),
            "angular" | "ng" => Ok(TargetFormat::Angular),
            "svelte" => Ok(TargetFormat::Svelte),
            _ => Err(format!(
                "unknown format '{}', expected one of: html, react, vue, angular, svelte",
                s
            )),
        }
    }
}
