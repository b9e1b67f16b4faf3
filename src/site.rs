//! Fixed site identity values.
//!
//! Everything search engines and social platforms see (URLs, names,
//! handles, fallback imagery) comes from the single frozen [`SITE`]
//! profile. Deployed pages are indexed against these exact strings,
//! so they are constants rather than configuration.

use crate::utils::slug;

/// Frozen identity of the deployed site.
#[derive(Debug, Clone, Copy)]
pub struct SiteProfile {
    /// Origin without a trailing slash.
    pub base_url: &'static str,
    /// Path segment under which blog posts live.
    pub blog_path: &'static str,
    /// Path segment under which grammar topics live.
    pub grammar_path: &'static str,
    /// Brand suffix appended to every page title.
    pub title_suffix: &'static str,
    pub site_name: &'static str,
    pub default_author: &'static str,
    pub default_category: &'static str,
    pub default_image_url: &'static str,
    pub default_image_alt: &'static str,
    pub publisher_logo_url: &'static str,
    pub twitter_handle: &'static str,
    /// Open Graph locale (underscore form).
    pub og_locale: &'static str,
    /// JSON-LD `inLanguage` (BCP 47 form).
    pub in_language: &'static str,
}

pub const SITE: SiteProfile = SiteProfile {
    base_url: "https://languagegems.com",
    blog_path: "/blog",
    grammar_path: "/grammar",
    title_suffix: " | Language Gems",
    site_name: "Language Gems",
    default_author: "Daniel Etienne",
    default_category: "Language Learning",
    default_image_url: "https://languagegems.com/images/blog/default-blog-post.jpg",
    default_image_alt: "Language Gems blog post",
    publisher_logo_url: "https://languagegems.com/images/logo.png",
    twitter_handle: "@languagegems",
    og_locale: "en_GB",
    in_language: "en-GB",
};

impl SiteProfile {
    /// Brand-suffixed page title.
    pub fn page_title(&self, title: &str) -> String {
        format!("{}{}", title, self.title_suffix)
    }

    /// Blog index URL.
    pub fn blog_index_url(&self) -> String {
        format!("{}{}", self.base_url, self.blog_path)
    }

    /// Canonical URL of a blog post.
    pub fn blog_url(&self, slug: &str) -> String {
        format!("{}{}/{}", self.base_url, self.blog_path, slug)
    }

    /// Blog index filtered by category, with the category converted to
    /// its query-parameter form.
    pub fn category_url(&self, category: &str) -> String {
        format!(
            "{}{}?category={}",
            self.base_url,
            self.blog_path,
            slug::query_value(category)
        )
    }

    /// Grammar section index URL.
    pub fn grammar_index_url(&self) -> String {
        format!("{}{}", self.base_url, self.grammar_path)
    }

    /// Canonical URL of a grammar topic page.
    pub fn grammar_url(&self, language: &str, category: &str, topic: &str) -> String {
        format!(
            "{}{}/{}/{}/{}",
            self.base_url, self.grammar_path, language, category, topic
        )
    }

    /// URL of an intermediate grammar breadcrumb level.
    pub fn grammar_level_url(&self, segments: &[&str]) -> String {
        let mut url = self.grammar_index_url();
        for segment in segments {
            url.push('/');
            url.push_str(segment);
        }
        url
    }
}
