//! Head snippet rendering.
//!
//! Serializes a post's metadata into the `<head>` fragment the site
//! embeds: title, meta tags, canonical link, Open Graph / Twitter
//! properties, robots directives, and a single `application/ld+json`
//! script whose body is the two-element array
//! `[structured_data, breadcrumbs]`.

use anyhow::Result;
use serde_json::Value;

use crate::meta::page::PageMetadata;
use crate::meta::{BlogPostMeta, GrammarTopicMeta};
use crate::utils::html::escape;

/// Full head snippet for a blog post.
pub fn blog_head(post: &BlogPostMeta) -> Result<String> {
    let documents = serde_json::json!([post.structured_data(), post.breadcrumbs()]);
    render(&post.page_metadata(), &documents)
}

/// Full head snippet for a grammar topic.
pub fn grammar_head(topic: &GrammarTopicMeta) -> Result<String> {
    let documents = serde_json::json!([topic.structured_data(), topic.breadcrumbs()]);
    render(&topic.page_metadata(), &documents)
}

fn meta_name(html: &mut String, name: &str, content: &str) {
    html.push_str("<meta name=\"");
    html.push_str(name);
    html.push_str("\" content=\"");
    html.push_str(&escape(content));
    html.push_str("\">\n");
}

fn meta_property(html: &mut String, property: &str, content: &str) {
    html.push_str("<meta property=\"");
    html.push_str(property);
    html.push_str("\" content=\"");
    html.push_str(&escape(content));
    html.push_str("\">\n");
}

fn render(page: &PageMetadata, documents: &Value) -> Result<String> {
    let mut html = String::with_capacity(2048);

    html.push_str("<title>");
    html.push_str(&escape(&page.title));
    html.push_str("</title>\n");

    meta_name(&mut html, "description", &page.description);
    if !page.keywords.is_empty() {
        meta_name(&mut html, "keywords", &page.keywords);
    }
    meta_name(&mut html, "author", &page.author);
    meta_name(&mut html, "creator", &page.creator);
    meta_name(&mut html, "publisher", &page.publisher);

    html.push_str("<link rel=\"canonical\" href=\"");
    html.push_str(&escape(&page.canonical));
    html.push_str("\">\n");

    let og = &page.open_graph;
    meta_property(&mut html, "og:title", &og.title);
    meta_property(&mut html, "og:description", &og.description);
    meta_property(&mut html, "og:url", &og.url);
    meta_property(&mut html, "og:site_name", &og.site_name);
    for image in &og.images {
        meta_property(&mut html, "og:image", &image.url);
        meta_property(&mut html, "og:image:width", &image.width.to_string());
        meta_property(&mut html, "og:image:height", &image.height.to_string());
        meta_property(&mut html, "og:image:alt", &image.alt);
    }
    meta_property(&mut html, "og:locale", og.locale);
    meta_property(&mut html, "og:type", og.og_type);

    if let Some(published) = &og.published_time {
        meta_property(&mut html, "article:published_time", published);
    }
    if let Some(modified) = &og.modified_time {
        meta_property(&mut html, "article:modified_time", modified);
    }
    for author in &og.authors {
        meta_property(&mut html, "article:author", author);
    }
    if !og.section.is_empty() {
        meta_property(&mut html, "article:section", &og.section);
    }
    for tag in &og.tags {
        meta_property(&mut html, "article:tag", tag);
    }

    let twitter = &page.twitter;
    meta_name(&mut html, "twitter:card", twitter.card);
    meta_name(&mut html, "twitter:title", &twitter.title);
    meta_name(&mut html, "twitter:description", &twitter.description);
    for image in &twitter.images {
        meta_name(&mut html, "twitter:image", image);
    }
    meta_name(&mut html, "twitter:site", twitter.site);
    meta_name(&mut html, "twitter:creator", twitter.creator);

    meta_name(&mut html, "robots", &page.robots.meta_content());
    meta_name(&mut html, "googlebot", &page.robots.googlebot.meta_content());

    html.push_str("<script type=\"application/ld+json\">");
    html.push_str(&json_for_html(documents)?);
    html.push_str("</script>\n");

    Ok(html)
}

/// JSON serialized for inline `<script>` embedding. `<` is written as
/// `\u003c` so document text can never terminate the script element.
fn json_for_html(value: &Value) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace('<', "\\u003c"))
}
