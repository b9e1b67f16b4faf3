//! Blog post records and their three generated documents: head
//! metadata, a `BlogPosting` JSON-LD document, and a breadcrumb trail.

use serde::Deserialize;

use crate::jsonld::{
    self, BlogPosting, BreadcrumbList, Organization, Person, WebPage, breadcrumb,
};
use crate::meta::non_empty;
use crate::meta::page::{OgImage, OpenGraph, PageMetadata, Robots, TwitterCard};
use crate::site::SITE;

/// One blog post definition, as read from a TOML file.
///
/// Every field is lenient: builders substitute defaults for absent or
/// empty optional fields and pass everything else through untouched.
/// `audit` is the place that complains about bad values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BlogPostMeta {
    pub title: String,
    pub description: String,
    pub slug: String,
    pub keywords: Vec<String>,
    pub author: Option<String>,
    /// ISO-8601, e.g. `2024-01-15T10:00:00Z`.
    pub published_date: Option<String>,
    pub modified_date: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    /// Overrides `title` in head metadata and structured data, not in
    /// breadcrumbs.
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

/// View of a post with every default substituted. Built once per call,
/// never stored.
struct ResolvedPost<'a> {
    display_title: &'a str,
    display_description: &'a str,
    author: &'a str,
    category: &'a str,
    image_url: &'a str,
    image_alt: &'a str,
    published: Option<&'a str>,
    modified: Option<&'a str>,
}

impl BlogPostMeta {
    fn resolve(&self) -> ResolvedPost<'_> {
        let published = non_empty(self.published_date.as_deref());

        ResolvedPost {
            display_title: non_empty(self.seo_title.as_deref()).unwrap_or(&self.title),
            display_description: non_empty(self.seo_description.as_deref())
                .unwrap_or(&self.description),
            author: non_empty(self.author.as_deref()).unwrap_or(SITE.default_author),
            category: non_empty(self.category.as_deref()).unwrap_or(SITE.default_category),
            image_url: non_empty(self.image_url.as_deref()).unwrap_or(SITE.default_image_url),
            image_alt: non_empty(self.image_alt.as_deref()).unwrap_or(SITE.default_image_alt),
            published,
            modified: non_empty(self.modified_date.as_deref()).or(published),
        }
    }

    pub fn canonical_url(&self) -> String {
        SITE.blog_url(&self.slug)
    }

    /// Document-head metadata for this post.
    pub fn page_metadata(&self) -> PageMetadata {
        let post = self.resolve();
        let canonical = self.canonical_url();

        PageMetadata {
            title: SITE.page_title(post.display_title),
            description: post.display_description.to_string(),
            keywords: self.keywords.join(", "),
            author: post.author.to_string(),
            creator: post.author.to_string(),
            publisher: SITE.site_name.to_string(),
            canonical: canonical.clone(),
            open_graph: OpenGraph {
                title: post.display_title.to_string(),
                description: post.display_description.to_string(),
                url: canonical,
                site_name: SITE.site_name.to_string(),
                images: vec![OgImage {
                    url: post.image_url.to_string(),
                    width: 1200,
                    height: 630,
                    alt: post.image_alt.to_string(),
                }],
                locale: SITE.og_locale,
                og_type: "article",
                published_time: post.published.map(str::to_string),
                modified_time: post.modified.map(str::to_string),
                authors: vec![post.author.to_string()],
                section: post.category.to_string(),
                tags: self.tags.clone(),
            },
            twitter: TwitterCard {
                card: "summary_large_image",
                title: post.display_title.to_string(),
                description: post.display_description.to_string(),
                images: vec![post.image_url.to_string()],
                site: SITE.twitter_handle,
                creator: SITE.twitter_handle,
            },
            robots: Robots::default(),
        }
    }

    /// schema.org `BlogPosting` document for this post.
    pub fn structured_data(&self) -> BlogPosting {
        let post = self.resolve();
        let canonical = self.canonical_url();

        BlogPosting {
            context: jsonld::CONTEXT,
            kind: "BlogPosting",
            headline: post.display_title.to_string(),
            description: post.display_description.to_string(),
            image: post.image_url.to_string(),
            author: Person::new(post.author),
            publisher: Organization::with_logo(SITE.site_name, SITE.publisher_logo_url),
            url: canonical.clone(),
            date_published: post.published.map(str::to_string),
            date_modified: post.modified.map(str::to_string),
            main_entity_of_page: WebPage::new(&canonical),
            article_section: post.category.to_string(),
            keywords: self.keywords.join(", "),
            in_language: SITE.in_language,
        }
    }

    /// Breadcrumb trail for this post. Always built from the raw title
    /// and category: the trail mirrors site navigation, not SEO copy.
    pub fn breadcrumbs(&self) -> BreadcrumbList {
        breadcrumb::blog_trail(&self.title, self.category.as_deref())
    }
}
