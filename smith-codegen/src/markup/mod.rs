//! Regex-based markup helpers.
//!
//! Nothing here parses HTML. Every transformation is a text rewrite, so
//! malformed input still yields output.

mod extract;
mod jsx;

pub use extract::{SourceParts, collect_class_names, extract_body, extract_style};
pub use jsx::{VOID_TAGS, self_close_void_tags, to_jsx, to_jsx_attributes};
