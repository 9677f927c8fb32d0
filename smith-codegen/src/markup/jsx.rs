use std::sync::LazyLock;

use regex::Regex;

/// Elements that must be self-closed in JSX.
pub const VOID_TAGS: [&str; 6] = ["img", "br", "hr", "input", "meta", "link"];

static CLASS_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\s)class=").unwrap());
static FOR_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\s)for=").unwrap());
static VOID_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)<({})(\b[^>]*?)\s*/?>",
        VOID_TAGS.join("|")
    ))
    .unwrap()
});

/// Rename `class=` to `className=` and `for=` to `htmlFor=`.
pub fn to_jsx_attributes(markup: &str) -> String {
    let markup = CLASS_ATTR.replace_all(markup, "${1}className=");
    FOR_ATTR.replace_all(&markup, "${1}htmlFor=").into_owned()
}

/// Rewrite `<img ...>` style void elements to `<img ... />`.
pub fn self_close_void_tags(markup: &str) -> String {
    VOID_TAG.replace_all(markup, "<${1}${2} />").into_owned()
}

/// Apply every JSX rewrite to a template body.
pub fn to_jsx(markup: &str) -> String {
    self_close_void_tags(&to_jsx_attributes(markup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_renames() {
        assert_eq!(
            to_jsx_attributes(r#"<label class="x" for="email">Email</label>"#),
            r#"<label className="x" htmlFor="email">Email</label>"#
        );
    }

    #[test]
    fn test_attribute_rename_ignores_text_and_prefixed_names() {
        let markup = r#"<p data-class="a">class=b</p>"#;
        assert_eq!(to_jsx_attributes(markup), markup);
    }

    #[test]
    fn test_self_close_void_tags() {
        assert_eq!(self_close_void_tags(r#"<img src="x">"#), r#"<img src="x" />"#);
        assert_eq!(self_close_void_tags("<br>"), "<br />");
        assert_eq!(self_close_void_tags("<hr/>"), "<hr />");
        assert_eq!(
            self_close_void_tags(r#"<input type="text" >"#),
            r#"<input type="text" />"#
        );
    }

    #[test]
    fn test_self_close_is_idempotent() {
        let once = self_close_void_tags(r#"<img src="x"><br>"#);
        assert_eq!(self_close_void_tags(&once), once);
    }

    #[test]
    fn test_self_close_leaves_other_tags() {
        let markup = "<linker></linker><header></header>";
        assert_eq!(self_close_void_tags(markup), markup);
    }

    #[test]
    fn test_to_jsx() {
        assert_eq!(
            to_jsx(r#"<div class="a"><img src="x"></div>"#),
            r#"<div className="a"><img src="x" /></div>"#
        );
    }
}
