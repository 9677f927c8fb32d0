use std::{path::PathBuf, str::FromStr};

use draftsmith_core::TargetFormat;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, SourceContext, validate};

/// Root of draftsmith.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Defaults for `smith export`
    #[serde(default)]
    pub export: ExportConfig,

    /// Where and how version history is kept
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub format: TargetFormat,
    pub component_name: String,
    pub tailwind: bool,
    /// React only
    pub type_annotations: bool,
    /// Vue only
    pub scoped_styles: bool,
    /// Directory generated files are written to
    pub output: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: TargetFormat::default(),
            component_name: "Component".to_string(),
            tailwind: false,
            type_annotations: true,
            scoped_styles: true,
            output: PathBuf::from("dist"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryConfig {
    /// JSON file holding saved versions
    pub store: PathBuf,
    pub project: String,
    pub autosave_window_secs: u64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            store: PathBuf::from(".draftsmith/history.json"),
            project: "default".to_string(),
            autosave_window_secs: 300,
        }
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, crate::MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse draftsmith.toml content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let manifest: Self = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        manifest.validate(&ctx)?;
        Ok(manifest)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        let name = &self.export.component_name;
        if let Some(reason) = validate::validate_component_name(name) {
            return Err(ctx.invalid_identifier_error("component_name", name, reason));
        }

        if self.history.project.trim().is_empty() {
            return Err(ctx.validation_error("project", "project must not be empty"));
        }

        if self.history.autosave_window_secs == 0 {
            return Err(ctx.validation_error(
                "autosave_window_secs",
                "autosave window must be at least one second",
            ));
        }

        Ok(())
    }

    /// Render as TOML, in the layout `smith init` writes.
    pub fn to_toml(&self) -> Result<String> {
        let body = toml::to_string_pretty(self)
            .map_err(|source| Box::new(Error::Serialize { source }))?;
        Ok(format!("{TOML_HEADER}{body}"))
    }
}

const TOML_HEADER: &str = "\
# draftsmith configuration
# export.format: html | react | vue | angular | svelte

";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let manifest: Manifest = "".parse().unwrap();
        assert_eq!(manifest, Manifest::default());
        assert_eq!(manifest.export.format, TargetFormat::React);
        assert_eq!(manifest.history.autosave_window_secs, 300);
    }

    #[test]
    fn test_partial_sections() {
        let manifest: Manifest = r#"
[export]
format = "svelte"
tailwind = true
"#
        .parse()
        .unwrap();

        assert_eq!(manifest.export.format, TargetFormat::Svelte);
        assert!(manifest.export.tailwind);
        assert_eq!(manifest.export.component_name, "Component");
        assert_eq!(manifest.history, HistoryConfig::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "[export]\nframework = \"vue\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = "[export]\nformat = \"solid\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
    }

    #[test]
    fn test_invalid_component_name() {
        let err = "[export]\ncomponent_name = \"hero-section\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid component_name 'hero-section'");
    }

    #[test]
    fn test_zero_autosave_window() {
        let err = "[history]\nautosave_window_secs = 0\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { span: Some(_), .. }));
    }

    #[test]
    fn test_to_toml_parses_back() {
        let mut manifest = Manifest::default();
        manifest.export.format = TargetFormat::Angular;
        manifest.export.component_name = "Pricing".to_string();
        manifest.history.project = "marketing-site".to_string();

        let parsed: Manifest = manifest.to_toml().unwrap().parse().unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_to_toml_escapes_strings() {
        let mut manifest = Manifest::default();
        manifest.history.project = "acme \"beta\" \\ team".to_string();
        manifest.history.store = PathBuf::from("history \"main\".json");

        let toml = manifest.to_toml().unwrap();
        let parsed: Manifest = toml.parse().unwrap();

        assert_eq!(parsed, manifest);
        assert!(toml.starts_with("# draftsmith configuration\n"));
    }

    #[test]
    fn test_to_toml_layout() {
        let toml = Manifest::default().to_toml().unwrap();

        insta::assert_snapshot!(toml, @r#"
        # draftsmith configuration
        # export.format: html | react | vue | angular | svelte

        [export]
        format = "react"
        component_name = "Component"
        tailwind = false
        type_annotations = true
        scoped_styles = true
        output = "dist"

        [history]
        store = ".draftsmith/history.json"
        project = "default"
        autosave_window_secs = 300
        "#);
    }
}
