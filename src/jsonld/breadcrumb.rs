//! Breadcrumb trail documents.

use serde::Serialize;

use super::CONTEXT;
use crate::site::SITE;
use crate::utils::slug;

/// schema.org `BreadcrumbList`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "itemListElement")]
    pub items: Vec<ListItem>,
}

/// One trail entry. An empty `item` marks the current page, which
/// carries no link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub position: usize,
    pub name: String,
    pub item: String,
}

impl BreadcrumbList {
    /// Builds a list from `(name, item)` pairs. Positions are 1-based
    /// and assigned by enumerating the final entry order, so optional
    /// entries never leave gaps.
    pub fn from_entries(entries: Vec<(String, String)>) -> Self {
        let items = entries
            .into_iter()
            .enumerate()
            .map(|(i, (name, item))| ListItem {
                kind: "ListItem",
                position: i + 1,
                name,
                item,
            })
            .collect();

        Self {
            context: CONTEXT,
            kind: "BreadcrumbList",
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Home -> Blog -> (category) -> current post.
///
/// The category entry appears only when a non-empty category is given.
/// Its link targets the blog index filtered by the category's
/// query-parameter form; the category NAME keeps its original casing.
pub fn blog_trail(title: &str, category: Option<&str>) -> BreadcrumbList {
    let mut entries = vec![
        ("Home".to_string(), SITE.base_url.to_string()),
        ("Blog".to_string(), SITE.blog_index_url()),
    ];

    if let Some(category) = category.filter(|c| !c.is_empty()) {
        entries.push((category.to_string(), SITE.category_url(category)));
    }

    entries.push((title.to_string(), String::new()));
    BreadcrumbList::from_entries(entries)
}

/// Home -> Grammar -> language -> category -> current topic.
///
/// Language and category arrive as path slugs and are shown in display
/// form ("verb-tenses" -> "Verb Tenses").
pub fn grammar_trail(language: &str, category: &str, title: &str) -> BreadcrumbList {
    let entries = vec![
        ("Home".to_string(), SITE.base_url.to_string()),
        ("Grammar".to_string(), SITE.grammar_index_url()),
        (slug::display_name(language), SITE.grammar_level_url(&[language])),
        (
            slug::display_name(category),
            SITE.grammar_level_url(&[language, category]),
        ),
        (title.to_string(), String::new()),
    ];

    BreadcrumbList::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_trail_without_category() {
        let trail = blog_trail("My Title", None);

        assert_eq!(trail.len(), 3);
        assert_eq!(trail.items[0].name, "Home");
        assert_eq!(trail.items[0].item, "https://languagegems.com");
        assert_eq!(trail.items[1].name, "Blog");
        assert_eq!(trail.items[1].item, "https://languagegems.com/blog");
        assert_eq!(trail.items[2].name, "My Title");
        assert_eq!(trail.items[2].item, "");
    }

    #[test]
    fn test_blog_trail_with_category() {
        let trail = blog_trail("My Title", Some("GCSE Prep"));

        assert_eq!(trail.len(), 4);
        assert_eq!(trail.items[2].name, "GCSE Prep");
        assert_eq!(
            trail.items[2].item,
            "https://languagegems.com/blog?category=gcse-prep"
        );
        assert_eq!(trail.items[3].name, "My Title");
        assert_eq!(trail.items[3].item, "");
    }

    #[test]
    fn test_blog_trail_empty_category_is_skipped() {
        let trail = blog_trail("My Title", Some(""));
        assert_eq!(trail.len(), 3);
    }

    #[test]
    fn test_positions_follow_entry_order() {
        let trail = blog_trail("Post", Some("Spanish"));
        let positions: Vec<usize> = trail.items.iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);

        let trail = blog_trail("Post", None);
        let positions: Vec<usize> = trail.items.iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_grammar_trail_shape() {
        let trail = grammar_trail("spanish", "verb-tenses", "Present Tense");

        assert_eq!(trail.len(), 5);
        assert_eq!(trail.items[1].name, "Grammar");
        assert_eq!(trail.items[1].item, "https://languagegems.com/grammar");
        assert_eq!(trail.items[2].name, "Spanish");
        assert_eq!(trail.items[2].item, "https://languagegems.com/grammar/spanish");
        assert_eq!(trail.items[3].name, "Verb Tenses");
        assert_eq!(
            trail.items[3].item,
            "https://languagegems.com/grammar/spanish/verb-tenses"
        );
        assert_eq!(trail.items[4].name, "Present Tense");
        assert_eq!(trail.items[4].item, "");
    }

    #[test]
    fn test_serialized_keys() {
        let trail = blog_trail("T", None);
        let json = serde_json::to_string(&trail).unwrap();

        assert!(json.starts_with("{\"@context\":\"https://schema.org\""));
        assert!(json.contains("\"@type\":\"BreadcrumbList\""));
        assert!(json.contains("\"itemListElement\":["));
        assert!(json.contains("\"@type\":\"ListItem\",\"position\":1"));
    }
}
