//! Page-head metadata records.
//!
//! The shapes consumed by the head renderer and the JSON emitter:
//! a top-level [`PageMetadata`] with Open Graph, Twitter Card and
//! robots sub-records. Construction happens in `meta::blog` and
//! `meta::grammar`; everything here is plain data.

use serde::Serialize;

/// Complete head metadata for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Display title with the brand suffix already appended.
    pub title: String,
    pub description: String,
    /// Comma-joined keyword list (empty string when no keywords given).
    pub keywords: String,
    pub author: String,
    pub creator: String,
    pub publisher: String,
    /// Canonical URL of the page.
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
}

/// Open Graph sub-record (`og:*` / `article:*` properties).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub images: Vec<OgImage>,
    pub locale: &'static str,
    #[serde(rename = "type")]
    pub og_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
    pub authors: Vec<String>,
    pub section: String,
    pub tags: Vec<String>,
}

/// Preview image with the dimensions social platforms expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

/// Twitter Card sub-record (`twitter:*` names).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub site: &'static str,
    pub creator: &'static str,
}

/// Robots directives. Input-independent: every page is indexable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    #[serde(rename = "googleBot")]
    pub googlebot: GoogleBot,
}

/// Crawler-specific overrides nested under `robots`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    #[serde(rename = "max-video-preview")]
    pub max_video_preview: i32,
    #[serde(rename = "max-image-preview")]
    pub max_image_preview: &'static str,
    #[serde(rename = "max-snippet")]
    pub max_snippet: i32,
}

impl Default for Robots {
    fn default() -> Self {
        Self {
            index: true,
            follow: true,
            googlebot: GoogleBot {
                index: true,
                follow: true,
                max_video_preview: -1,
                max_image_preview: "large",
                max_snippet: -1,
            },
        }
    }
}

impl Robots {
    /// `content` value for the `robots` meta tag.
    pub fn meta_content(&self) -> String {
        format!(
            "{}, {}",
            if self.index { "index" } else { "noindex" },
            if self.follow { "follow" } else { "nofollow" }
        )
    }
}

impl GoogleBot {
    /// `content` value for the `googlebot` meta tag.
    pub fn meta_content(&self) -> String {
        format!(
            "{}, {}, max-video-preview:{}, max-image-preview:{}, max-snippet:{}",
            if self.index { "index" } else { "noindex" },
            if self.follow { "follow" } else { "nofollow" },
            self.max_video_preview,
            self.max_image_preview,
            self.max_snippet
        )
    }
}
