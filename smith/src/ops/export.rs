//! Export operation - turn an HTML file into component files.

use std::path::Path;

use draftsmith_core::{DirectorySink, Overwrite, to_pascal_case};
use draftsmith_export::{ExportOptions, download_files};
use eyre::{Context, Result};
use tracing::info;

use crate::reports::ExportReport;

pub struct ExportRequest<'a> {
    pub input: &'a Path,
    pub options: ExportOptions,
    pub output_dir: &'a Path,
    /// Render without writing anything.
    pub dry_run: bool,
    pub overwrite: Overwrite,
}

/// Execute the export operation.
pub fn export(request: ExportRequest) -> Result<ExportReport> {
    let source = std::fs::read_to_string(request.input)
        .wrap_err_with(|| format!("Failed to read {}", request.input.display()))?;

    let result = draftsmith_export::export(&source, &request.options);
    info!(
        input = %request.input.display(),
        format = %request.options.target_format,
        files = result.file_count(),
        "exported component"
    );

    let download = if request.dry_run {
        None
    } else {
        let sink = DirectorySink::new(request.output_dir).with_overwrite(request.overwrite);
        Some(download_files(&result, &sink))
    };

    Ok(ExportReport {
        format: request.options.target_format,
        component_name: request.options.component_name,
        output_dir: request.output_dir.to_path_buf(),
        result,
        download,
    })
}

/// Component name for an input file: its stem in PascalCase, or `fallback`
/// when the stem does not make a usable identifier.
pub fn default_component_name(input: &Path, fallback: &str) -> String {
    let name = input
        .file_stem()
        .map(|stem| to_pascal_case(&stem.to_string_lossy()))
        .unwrap_or_default();

    let usable = name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if usable { name } else { fallback.to_string() }
}

#[cfg(test)]
mod tests {
    use draftsmith_export::TargetFormat;
    use tempfile::TempDir;

    use super::*;

    const PAGE: &str = "<html><head><style>.a { color: red; }</style></head>\
                        <body><div class=\"a\">Hi</div></body></html>";

    fn request<'a>(input: &'a Path, out: &'a Path, dry_run: bool) -> ExportRequest<'a> {
        ExportRequest {
            input,
            options: ExportOptions::new(TargetFormat::React, "Card"),
            output_dir: out,
            dry_run,
            overwrite: Overwrite::Always,
        }
    }

    #[test]
    fn test_export_writes_all_files() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("card.html");
        std::fs::write(&input, PAGE).unwrap();
        let out = temp.path().join("dist");

        let report = export(request(&input, &out, false)).unwrap();

        assert_eq!(report.failure_count(), 0);
        let tsx = std::fs::read_to_string(out.join("Card.tsx")).unwrap();
        assert!(tsx.contains(r#"<div className="a">Hi</div>"#));
        assert_eq!(
            std::fs::read_to_string(out.join("Card.css")).unwrap(),
            ".a { color: red; }"
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("card.html");
        std::fs::write(&input, PAGE).unwrap();
        let out = temp.path().join("dist");

        let report = export(request(&input, &out, true)).unwrap();

        assert!(report.is_dry_run());
        assert!(!out.exists());
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("missing.html");

        let err = export(request(&input, temp.path(), false)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }

    #[test]
    fn test_default_component_name() {
        assert_eq!(
            default_component_name(Path::new("pages/hero-section.html"), "Component"),
            "HeroSection"
        );
        assert_eq!(
            default_component_name(Path::new("pricing_table.htm"), "Component"),
            "PricingTable"
        );
        assert_eq!(
            default_component_name(Path::new("404.html"), "Component"),
            "Component"
        );
    }
}
