//! Typed schema.org documents.
//!
//! Each document serializes to the exact JSON-LD shape deployed pages
//! already carry, so field order and `@`-prefixed vocabulary tags are
//! part of the contract. Serialize-only: these are never read back.

pub mod article;
pub mod breadcrumb;

use serde::Serialize;

pub use article::{BlogPosting, GrammarArticle};
pub use breadcrumb::{BreadcrumbList, ListItem};

/// Vocabulary context shared by every emitted document.
pub const CONTEXT: &str = "https://schema.org";

/// schema.org `Person`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: "Person",
            name: name.into(),
        }
    }
}

/// schema.org `Organization`, optionally carrying a logo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
}

impl Organization {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: "Organization",
            name: name.into(),
            logo: None,
        }
    }

    pub fn with_logo(name: impl Into<String>, logo_url: impl Into<String>) -> Self {
        Self {
            kind: "Organization",
            name: name.into(),
            logo: Some(ImageObject::new(logo_url)),
        }
    }
}

/// schema.org `ImageObject`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub url: String,
}

impl ImageObject {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            kind: "ImageObject",
            url: url.into(),
        }
    }
}

/// schema.org `WebPage` reference used for `mainEntityOfPage`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPage {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

impl WebPage {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            kind: "WebPage",
            id: id.into(),
        }
    }
}
