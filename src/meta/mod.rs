//! Post definition records and the metadata built from them.
//!
//! `blog` and `grammar` hold the two input record types and their
//! builder methods; `page` holds the document-head output shape shared
//! by both. Builders never validate and never touch the filesystem.

pub mod blog;
pub mod grammar;
pub mod page;

pub use blog::BlogPostMeta;
pub use grammar::GrammarTopicMeta;
pub use page::PageMetadata;

/// Treats an empty string the same as an absent one. Default
/// substitution throughout this crate goes through here, so a field set
/// to `""` in a definition file still picks up its default.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("x")), Some("x"));
        assert_eq!(non_empty(Some(" ")), Some(" "));
    }
}
