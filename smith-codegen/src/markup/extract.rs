use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style(?:\s[^>]*)?>(.*?)</style\s*>").unwrap());
static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script(?:\s[^>]*)?>.*?</script\s*>").unwrap());
static HEAD_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<head(?:\s[^>]*)?>.*?</head\s*>").unwrap());
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?html(?:\s[^>]*)?>").unwrap());
static BODY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?body(?:\s[^>]*)?>").unwrap());
static CLASS_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bclass\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap());

/// The pieces of an HTML source every exporter works from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceParts {
    /// Inner text of the first `<style>` block, or empty.
    pub css: String,
    /// Markup left after stripping document scaffolding.
    pub body: String,
    /// Distinct class tokens found anywhere in the source.
    ///
    /// Collected for per-class analysis; no exporter reads it yet.
    pub class_names: IndexSet<String>,
}

impl SourceParts {
    /// Split `html` into css, template body and class names.
    pub fn extract(html: &str) -> Self {
        Self {
            css: extract_style(html),
            body: extract_body(html),
            class_names: collect_class_names(html),
        }
    }
}

/// Inner text of the first `<style>` block (case-insensitive), or `""`.
pub fn extract_style(html: &str) -> String {
    STYLE_BLOCK
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Strip the first script, style and head blocks plus the `html` and `body`
/// tags, returning the trimmed remainder.
pub fn extract_body(html: &str) -> String {
    let body = SCRIPT_BLOCK.replace(html, "");
    let body = STYLE_BLOCK.replace(&body, "");
    let body = HTML_TAG.replace_all(&body, "");
    let body = HEAD_BLOCK.replace(&body, "");
    let body = BODY_TAG.replace_all(&body, "");
    body.trim().to_string()
}

/// Distinct class tokens across every `class` attribute, in first-seen order.
pub fn collect_class_names(html: &str) -> IndexSet<String> {
    CLASS_ATTR
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .flat_map(|value| value.as_str().split_whitespace())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Landing</title>
  <style>.hero { color: red; }</style>
</head>
<body class="page">
  <header class="hero">Hi</header>
  <script>console.log("x")</script>
</body>
</html>"#;

    #[test]
    fn test_extract_style_first_block_only() {
        let html = "<style>.a{}</style><p></p><style>.b{}</style>";
        assert_eq!(extract_style(html), ".a{}");
    }

    #[test]
    fn test_extract_style_case_insensitive_multiline() {
        let html = "<STYLE type=\"text/css\">\n.a { margin: 0; }\n</STYLE>";
        assert_eq!(extract_style(html), "\n.a { margin: 0; }\n");
    }

    #[test]
    fn test_extract_style_missing_block() {
        assert_eq!(extract_style("<div></div>"), "");
    }

    #[test]
    fn test_extract_body_strips_scaffolding() {
        let body = extract_body(PAGE);

        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains(r#"<header class="hero">Hi</header>"#));
        assert!(!body.contains("<head>"));
        assert!(!body.contains("<title>"));
        assert!(!body.contains("<script>"));
        assert!(!body.contains("<body"));
        assert!(!body.contains("</html>"));
    }

    #[test]
    fn test_extract_body_keeps_header_element() {
        let body = extract_body("<header>Top</header><main>Body</main>");
        assert_eq!(body, "<header>Top</header><main>Body</main>");
    }

    #[test]
    fn test_extract_body_only_first_script_removed() {
        let body = extract_body("<script>a()</script><p>x</p><script>b()</script>");
        assert_eq!(body, "<p>x</p><script>b()</script>");
    }

    #[test]
    fn test_extract_body_tolerates_unclosed_tags() {
        assert_eq!(extract_body("<div><p>open"), "<div><p>open");
        assert_eq!(extract_body("<style>.a{}"), "<style>.a{}");
    }

    #[test]
    fn test_collect_class_names_dedupes() {
        let html = r#"<div class="card shadow"><p class='card title'></p></div>"#;
        let names: Vec<_> = collect_class_names(html).into_iter().collect();
        assert_eq!(names, ["card", "shadow", "title"]);
    }

    #[test]
    fn test_source_parts() {
        let parts = SourceParts::extract(PAGE);
        assert_eq!(parts.css, ".hero { color: red; }");
        assert!(parts.class_names.contains("page"));
        assert!(parts.class_names.contains("hero"));
    }
}
