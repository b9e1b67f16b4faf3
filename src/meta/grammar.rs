//! Grammar topic records, the sibling of `blog` for the grammar
//! section. Same three outputs, with the LearningResource flavor of
//! structured data and site-authored pages instead of bylined ones.

use serde::Deserialize;

use crate::jsonld::{self, BreadcrumbList, GrammarArticle, Organization, WebPage, breadcrumb};
use crate::meta::non_empty;
use crate::meta::page::{OgImage, OpenGraph, PageMetadata, Robots, TwitterCard};
use crate::site::SITE;

/// One grammar topic definition, as read from a TOML file with
/// `kind = "grammar"`.
///
/// `language`, `category`, and `topic` are path slugs
/// (`spanish/verb-tenses/present-tense`); `title` is the human heading.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GrammarTopicMeta {
    pub language: String,
    pub category: String,
    pub topic: String,
    pub title: String,
    pub description: String,
    /// Free-form, but `beginner`/`intermediate`/`advanced` are
    /// recognized and capitalized.
    pub difficulty: Option<String>,
    pub keywords: Vec<String>,
    /// Example phrases, surfaced as the `teaches` property.
    pub examples: Vec<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

fn educational_level(difficulty: Option<&str>) -> Option<String> {
    let level = non_empty(difficulty)?.trim();
    if level.is_empty() {
        return None;
    }

    let normalized = match level.to_lowercase().as_str() {
        "beginner" => "Beginner",
        "intermediate" => "Intermediate",
        "advanced" => "Advanced",
        _ => level,
    };
    Some(normalized.to_string())
}

impl GrammarTopicMeta {
    fn display_title(&self) -> &str {
        non_empty(self.seo_title.as_deref()).unwrap_or(&self.title)
    }

    fn display_description(&self) -> &str {
        non_empty(self.seo_description.as_deref()).unwrap_or(&self.description)
    }

    pub fn canonical_url(&self) -> String {
        SITE.grammar_url(&self.language, &self.category, &self.topic)
    }

    /// Document-head metadata for this topic. Grammar pages carry the
    /// site as author and no publication dates.
    pub fn page_metadata(&self) -> PageMetadata {
        let canonical = self.canonical_url();

        PageMetadata {
            title: SITE.page_title(self.display_title()),
            description: self.display_description().to_string(),
            keywords: self.keywords.join(", "),
            author: SITE.site_name.to_string(),
            creator: SITE.site_name.to_string(),
            publisher: SITE.site_name.to_string(),
            canonical: canonical.clone(),
            open_graph: OpenGraph {
                title: self.display_title().to_string(),
                description: self.display_description().to_string(),
                url: canonical,
                site_name: SITE.site_name.to_string(),
                images: vec![OgImage {
                    url: SITE.default_image_url.to_string(),
                    width: 1200,
                    height: 630,
                    alt: SITE.default_image_alt.to_string(),
                }],
                locale: SITE.og_locale,
                og_type: "article",
                published_time: None,
                modified_time: None,
                authors: vec![SITE.site_name.to_string()],
                section: "Grammar".to_string(),
                tags: Vec::new(),
            },
            twitter: TwitterCard {
                card: "summary_large_image",
                title: self.display_title().to_string(),
                description: self.display_description().to_string(),
                images: vec![SITE.default_image_url.to_string()],
                site: SITE.twitter_handle,
                creator: SITE.twitter_handle,
            },
            robots: Robots::default(),
        }
    }

    /// schema.org `Article` document for this topic.
    pub fn structured_data(&self) -> GrammarArticle {
        let canonical = self.canonical_url();

        GrammarArticle {
            context: jsonld::CONTEXT,
            kind: "Article",
            headline: self.display_title().to_string(),
            description: self.display_description().to_string(),
            author: Organization::new(SITE.site_name),
            publisher: Organization::with_logo(SITE.site_name, SITE.publisher_logo_url),
            url: canonical.clone(),
            main_entity_of_page: WebPage::new(&canonical),
            article_section: "Grammar",
            educational_level: educational_level(self.difficulty.as_deref()),
            learning_resource_type: "Grammar Guide",
            teaches: self.examples.clone(),
            keywords: self.keywords.join(", "),
            in_language: SITE.in_language,
        }
    }

    /// Home -> Grammar -> language -> category -> topic title.
    pub fn breadcrumbs(&self) -> BreadcrumbList {
        breadcrumb::grammar_trail(&self.language, &self.category, &self.title)
    }
}
