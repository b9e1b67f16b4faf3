//! Article-shaped structured data.
//!
//! Field declaration order is serialization order, which deployed pages
//! depend on. `meta::blog` and `meta::grammar` construct these.

use serde::Serialize;

use super::{Organization, Person, WebPage};

/// schema.org `BlogPosting` for a blog article.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPosting {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    pub description: String,
    pub image: String,
    pub author: Person,
    pub publisher: Organization,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    pub main_entity_of_page: WebPage,
    pub article_section: String,
    /// Comma-joined keyword list.
    pub keywords: String,
    pub in_language: &'static str,
}

/// schema.org `Article` for a grammar topic page, carrying the
/// LearningResource properties search engines use for educational
/// content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarArticle {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    pub description: String,
    pub author: Organization,
    pub publisher: Organization,
    pub url: String,
    pub main_entity_of_page: WebPage,
    pub article_section: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub educational_level: Option<String>,
    pub learning_resource_type: &'static str,
    /// Example phrases the topic teaches, when the post supplies any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teaches: Vec<String>,
    pub keywords: String,
    pub in_language: &'static str,
}
