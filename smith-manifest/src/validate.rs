//! Identifier checks and source-span lookup for diagnostics

use miette::SourceSpan;

/// JavaScript reserved words, which can name neither a class nor a function.
pub(crate) const JS_RESERVED: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

pub(crate) fn is_reserved(name: &str) -> bool {
    JS_RESERVED.contains(&name)
}

/// Check that `name` can be used as a component identifier.
/// Returns None if valid, Some(reason) if invalid
pub fn validate_component_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, underscore or dollar sign"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return Some("name must contain only letters, numbers, underscores and dollar signs");
    }

    if is_reserved(name) {
        return Some("name is a JavaScript reserved word");
    }

    None
}

/// Find the span of the value assigned to `key` (e.g. `key = "value"`).
pub(crate) fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;

    for line in src.split_inclusive('\n') {
        let start = offset;
        offset += line.len();

        let trimmed = line.trim_start();
        let Some(rest) = trimmed.strip_prefix(key) else {
            continue;
        };
        let after_key = rest.trim_start();
        let Some(value) = after_key.strip_prefix('=') else {
            continue;
        };

        let value_trimmed = value.trim_start();
        let value_start = start
            + (line.len() - trimmed.len())
            + key.len()
            + (rest.len() - after_key.len())
            + 1
            + (value.len() - value_trimmed.len());
        let len = value_trimmed.trim_end().len();
        return Some(SourceSpan::from((value_start, len)));
    }

    None
}
