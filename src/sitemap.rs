//! Sitemap generation.
//!
//! Builds a sitemap.xml over a batch of post definitions. Writing the
//! file is the CLI's job; this module only assembles XML.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://languagegems.com/blog/my-post</loc>
//!     <lastmod>2024-01-15T10:00:00Z</lastmod>
//!   </url>
//! </urlset>
//! ```

use std::borrow::Cow;

use crate::meta::{BlogPostMeta, GrammarTopicMeta, non_empty};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

pub struct UrlEntry {
    pub loc: String,
    pub lastmod: Option<String>,
}

impl UrlEntry {
    pub fn from_post(post: &BlogPostMeta) -> Self {
        let lastmod = non_empty(post.modified_date.as_deref())
            .or(non_empty(post.published_date.as_deref()))
            .map(str::to_string);

        Self {
            loc: post.canonical_url(),
            lastmod,
        }
    }

    /// Grammar topics carry no dates, so no `<lastmod>`.
    pub fn from_topic(topic: &GrammarTopicMeta) -> Self {
        Self {
            loc: topic.canonical_url(),
            lastmod: None,
        }
    }
}

impl Sitemap {
    pub fn new(urls: Vec<UrlEntry>) -> Self {
        Self { urls }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&escape_xml(&lastmod));
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Minify XML content if enabled.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        let xml_str = std::str::from_utf8(content).unwrap_or("");
        let minified = xml_str
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified.into_bytes())
    } else {
        Cow::Borrowed(content)
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, published: Option<&str>, modified: Option<&str>) -> BlogPostMeta {
        BlogPostMeta {
            slug: slug.to_string(),
            published_date: published.map(str::to_string),
            modified_date: modified.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_entry_prefers_modified_date() {
        let entry = UrlEntry::from_post(&post(
            "a",
            Some("2024-01-15T10:00:00Z"),
            Some("2024-02-01T09:30:00Z"),
        ));
        assert_eq!(entry.loc, "https://languagegems.com/blog/a");
        assert_eq!(entry.lastmod.as_deref(), Some("2024-02-01T09:30:00Z"));

        let entry = UrlEntry::from_post(&post("a", Some("2024-01-15T10:00:00Z"), None));
        assert_eq!(entry.lastmod.as_deref(), Some("2024-01-15T10:00:00Z"));

        let entry = UrlEntry::from_post(&post("a", None, Some("")));
        assert_eq!(entry.lastmod, None);
    }

    #[test]
    fn test_topic_entry_has_no_lastmod() {
        let topic = GrammarTopicMeta {
            language: "spanish".to_string(),
            category: "verb-tenses".to_string(),
            topic: "present-tense".to_string(),
            ..Default::default()
        };

        let entry = UrlEntry::from_topic(&topic);
        assert_eq!(
            entry.loc,
            "https://languagegems.com/grammar/spanish/verb-tenses/present-tense"
        );
        assert_eq!(entry.lastmod, None);
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = Sitemap::new(vec![]).into_xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_entries() {
        let xml = Sitemap::new(vec![
            UrlEntry::from_post(&post("first", Some("2024-01-15"), None)),
            UrlEntry::from_post(&post("second", None, None)),
        ])
        .into_xml();

        assert!(xml.contains("<loc>https://languagegems.com/blog/first</loc>"));
        assert!(xml.contains("<lastmod>2024-01-15</lastmod>"));
        assert!(xml.contains("<loc>https://languagegems.com/blog/second</loc>"));
        assert_eq!(xml.matches("<url>").count(), 2);
        assert_eq!(xml.matches("<lastmod>").count(), 1);
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let xml = Sitemap::new(vec![UrlEntry {
            loc: "https://languagegems.com/blog?category=a&b".to_string(),
            lastmod: None,
        }])
        .into_xml();

        assert!(xml.contains("<loc>https://languagegems.com/blog?category=a&amp;b</loc>"));
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let xml = Sitemap::new(vec![UrlEntry::from_post(&post("a", None, None))]).into_xml();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert_eq!(lines.last().unwrap().trim(), "</urlset>");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
    }

    #[test]
    fn test_minify_xml() {
        let xml = b"<root>\n  <item/>\n\n</root>";

        assert_eq!(&*minify_xml(xml, true), b"<root><item/></root>");
        assert_eq!(&*minify_xml(xml, false), xml.as_slice());
    }
}
