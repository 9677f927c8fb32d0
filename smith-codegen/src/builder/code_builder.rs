//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for emitting fragments.
///
/// # Example
///
/// ```
/// use draftsmith_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::web()
///     .line("<template>")
///     .indent()
///     .line("<p>Hello</p>")
///     .dedent()
///     .line("</template>")
///     .build();
///
/// assert_eq!(code, "<template>\n  <p>Hello</p>\n</template>\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn web() -> Self {
        Self::new(Indent::WEB)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add multi-line text at the current indentation (mutable).
    ///
    /// Whitespace-only lines are emitted as empty lines so the output never
    /// carries trailing indentation.
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            if line.trim().is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Add text verbatim (mutable).
    ///
    /// No indentation is applied and no line is altered. A trailing newline
    /// is appended when `text` does not already end with one.
    pub fn push_raw(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        self.buffer.push_str(text);
        if !text.ends_with('\n') {
            self.buffer.push('\n');
        }
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Text(s) => {
                self.push_text(&s);
            }
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Add multi-line text at the current indentation.
    pub fn text(mut self, text: &str) -> Self {
        self.push_text(text);
        self
    }

    /// Add text verbatim, ignoring the current indentation.
    pub fn raw(mut self, text: &str) -> Self {
        self.push_raw(text);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use draftsmith_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::web()
    ///     .block_with_close("<template>", "</template>", |b: CodeBuilder| {
    ///         b.line("<div></div>")
    ///     })
    ///     .build();
    ///
    /// assert_eq!(code, "<template>\n  <div></div>\n</template>\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Emit a Renderable node.
    pub fn node(mut self, node: &impl Renderable) -> Self {
        self.emit(node);
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::web()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::web().line("const x = 1;").build();
        assert_eq!(code, "const x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::web()
            .line("function foo() {")
            .indent()
            .line("return 1;")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "function foo() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_wide_indent() {
        let code = CodeBuilder::new(Indent::WIDE)
            .block_with_close("{", "}", |b| b.line("a: 1,"))
            .build();

        assert_eq!(code, "{\n    a: 1,\n}\n");
    }

    #[test]
    fn test_text_indents_each_line() {
        let code = CodeBuilder::web()
            .indent()
            .text("<div>\n  <p>Hi</p>\n</div>")
            .build();

        assert_eq!(code, "  <div>\n    <p>Hi</p>\n  </div>\n");
    }

    #[test]
    fn test_text_keeps_blank_lines_empty() {
        let code = CodeBuilder::web().indent().text("<a></a>\n   \n<b></b>").build();

        assert_eq!(code, "  <a></a>\n\n  <b></b>\n");
    }

    #[test]
    fn test_raw_ignores_indentation() {
        let code = CodeBuilder::web()
            .line("<template>")
            .indent()
            .raw("<pre>line1\n    indented\n\t\n</pre>")
            .dedent()
            .line("</template>")
            .build();

        assert_eq!(
            code,
            "<template>\n<pre>line1\n    indented\n\t\n</pre>\n</template>\n"
        );
    }

    #[test]
    fn test_raw_keeps_existing_trailing_newline() {
        assert_eq!(CodeBuilder::web().raw("a\n").build(), "a\n");
        assert_eq!(CodeBuilder::web().indent().raw("").build(), "");
    }

    #[test]
    fn test_text_empty_input_emits_nothing() {
        let code = CodeBuilder::web().indent().text("").build();
        assert_eq!(code, "");
    }

    #[test]
    fn test_conditional() {
        let with_import = CodeBuilder::web()
            .when(true, |b| b.line("import './Hero.css';"))
            .line("const Hero = () => null;")
            .build();

        let without_import = CodeBuilder::web()
            .when(false, |b| b.line("import './Hero.css';"))
            .line("const Hero = () => null;")
            .build();

        assert_eq!(
            with_import,
            "import './Hero.css';\nconst Hero = () => null;\n"
        );
        assert_eq!(without_import, "const Hero = () => null;\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::web()
            .each(["a", "b"], |b, item| b.line(&format!("<li>{}</li>", item)))
            .build();

        assert_eq!(code, "<li>a</li>\n<li>b</li>\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Block {
                    header: "export default {".to_string(),
                    body: vec![CodeFragment::line("name: 'Hero',")],
                    close: Some("};".to_string()),
                }]
            }
        }

        let mut builder = CodeBuilder::web();
        builder.emit(&BlockNode);
        assert_eq!(builder.build(), "export default {\n  name: 'Hero',\n};\n");
    }

    #[test]
    fn test_emit_sequence_and_text() {
        struct Node;
        impl Renderable for Node {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Sequence(vec![
                    CodeFragment::line("<style>"),
                    CodeFragment::text(".a {}\n.b {}"),
                    CodeFragment::line("</style>"),
                    CodeFragment::Blank,
                ])]
            }
        }

        let code = CodeBuilder::web().node(&Node).build();
        assert_eq!(code, "<style>\n.a {}\n.b {}\n</style>\n\n");
    }
}
