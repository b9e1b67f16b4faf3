//! SEO audit checks over post definitions.
//!
//! The builders in `meta` stay lenient and emit whatever they are
//! given; this module is where bad values get flagged. Errors are
//! fields a page cannot ship without, warnings are search-ranking
//! problems.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use owo_colors::OwoColorize;
use regex::Regex;
use url::Url;

use crate::meta::{BlogPostMeta, GrammarTopicMeta, non_empty};
use crate::utils::date::DateTimeUtc;
use crate::utils::{plural_count, plural_s};

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

/// Search result snippets truncate around these lengths.
pub const TITLE_MAX_CHARS: usize = 60;
pub const DESCRIPTION_MIN_CHARS: usize = 50;
pub const DESCRIPTION_MAX_CHARS: usize = 160;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single finding against one field of a post definition.
#[derive(Debug, Clone)]
pub struct AuditIssue {
    pub severity: Severity,
    pub field: &'static str,
    pub message: String,
}

impl AuditIssue {
    fn error(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field,
            message: message.into(),
        }
    }

    fn warning(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field,
            message: message.into(),
        }
    }
}

/// Audit one blog post definition.
pub fn audit_post(post: &BlogPostMeta) -> Vec<AuditIssue> {
    let mut issues = Vec::new();

    check_title(&mut issues, &post.title);
    check_description(&mut issues, &post.description);
    check_slug(&mut issues, "slug", &post.slug);

    if post.keywords.is_empty() {
        issues.push(AuditIssue::warning("keywords", "none set"));
    }

    check_date(&mut issues, "published-date", post.published_date.as_deref());
    check_date(&mut issues, "modified-date", post.modified_date.as_deref());
    check_image(&mut issues, post.image_url.as_deref(), post.image_alt.as_deref());

    issues
}

/// Audit one grammar topic definition.
pub fn audit_topic(topic: &GrammarTopicMeta) -> Vec<AuditIssue> {
    let mut issues = Vec::new();

    check_slug(&mut issues, "language", &topic.language);
    check_slug(&mut issues, "category", &topic.category);
    check_slug(&mut issues, "topic", &topic.topic);
    check_title(&mut issues, &topic.title);
    check_description(&mut issues, &topic.description);

    if topic.keywords.is_empty() {
        issues.push(AuditIssue::warning("keywords", "none set"));
    }

    issues
}

fn check_title(issues: &mut Vec<AuditIssue>, title: &str) {
    if title.is_empty() {
        issues.push(AuditIssue::error("title", "missing"));
        return;
    }

    let chars = title.chars().count();
    if chars > TITLE_MAX_CHARS {
        issues.push(AuditIssue::warning(
            "title",
            format!("{chars} chars, truncated in results after {TITLE_MAX_CHARS}"),
        ));
    }
}

fn check_description(issues: &mut Vec<AuditIssue>, description: &str) {
    if description.is_empty() {
        issues.push(AuditIssue::error("description", "missing"));
        return;
    }

    let chars = description.chars().count();
    if chars < DESCRIPTION_MIN_CHARS {
        issues.push(AuditIssue::warning(
            "description",
            format!("{chars} chars, under the {DESCRIPTION_MIN_CHARS} char minimum"),
        ));
    } else if chars > DESCRIPTION_MAX_CHARS {
        issues.push(AuditIssue::warning(
            "description",
            format!("{chars} chars, truncated in results after {DESCRIPTION_MAX_CHARS}"),
        ));
    }
}

fn check_slug(issues: &mut Vec<AuditIssue>, field: &'static str, value: &str) {
    if value.is_empty() {
        issues.push(AuditIssue::error(field, "missing"));
    } else if !SLUG_RE.is_match(value) {
        issues.push(AuditIssue::warning(
            field,
            format!("`{value}` is not url-safe (want lowercase words joined by `-`)"),
        ));
    }
}

fn check_date(issues: &mut Vec<AuditIssue>, field: &'static str, value: Option<&str>) {
    let Some(value) = non_empty(value) else {
        return;
    };

    if DateTimeUtc::parse(value).is_none() {
        issues.push(AuditIssue::warning(
            field,
            format!("`{value}` is not ISO-8601 (`YYYY-MM-DDTHH:MM:SSZ`)"),
        ));
    }
}

fn check_image(issues: &mut Vec<AuditIssue>, image_url: Option<&str>, image_alt: Option<&str>) {
    let Some(value) = non_empty(image_url) else {
        return;
    };

    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => issues.push(AuditIssue::warning(
            "image-url",
            format!("scheme `{}` is not http(s)", url.scheme()),
        )),
        Err(_) => issues.push(AuditIssue::warning(
            "image-url",
            "not an absolute url (social cards need one)",
        )),
    }

    if non_empty(image_alt).is_none() {
        issues.push(AuditIssue::warning(
            "image-alt",
            "missing while image-url is set",
        ));
    }
}

/// Findings across a batch of files, grouped by source path.
#[derive(Debug, Default)]
pub struct AuditReport {
    pub files: BTreeMap<String, Vec<AuditIssue>>,
}

impl AuditReport {
    pub fn add(&mut self, source: String, issues: Vec<AuditIssue>) {
        if !issues.is_empty() {
            self.files.entry(source).or_default().extend(issues);
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Count of files carrying at least one error.
    pub fn error_file_count(&self) -> usize {
        self.files
            .values()
            .filter(|issues| issues.iter().any(|i| i.severity == Severity::Error))
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.files
            .values()
            .flatten()
            .filter(|i| i.severity == severity)
            .count()
    }

    /// Print the detailed report to stderr, grouped by file.
    pub fn print(&self) {
        if self.files.is_empty() {
            return;
        }
        eprintln!();

        let errors = self.error_count();
        let warnings = self.warning_count();
        let mut counts = vec![plural_count(self.file_count(), "file")];
        if errors > 0 {
            counts.push(format!("{errors} error{}", plural_s(errors)));
        }
        if warnings > 0 {
            counts.push(format!("{warnings} warning{}", plural_s(warnings)));
        }

        eprintln!(
            "{} {}",
            "seo".red().bold(),
            format!("({})", counts.join(", ")).dimmed()
        );

        for (path, issues) in &self.files {
            eprintln!("{}{}{}", "[".dimmed(), path.cyan(), "]".dimmed());
            for issue in issues {
                match issue.severity {
                    Severity::Error => {
                        eprintln!("{} {} {}", "→".red(), issue.field, issue.message);
                    }
                    Severity::Warning => {
                        eprintln!("{} {} {}", "→".yellow(), issue.field, issue.message);
                    }
                }
            }
        }
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.error_count();
        let warnings = self.warning_count();

        if errors + warnings == 0 {
            return write!(f, "{}", "all checks passed".green());
        }

        let mut parts = Vec::new();
        if errors > 0 {
            parts.push(format!(
                "{} {}",
                errors.to_string().red().bold(),
                format!("error{}", plural_s(errors)).dimmed()
            ));
        }
        if warnings > 0 {
            parts.push(format!(
                "{} {}",
                warnings.to_string().yellow().bold(),
                format!("warning{}", plural_s(warnings)).dimmed()
            ));
        }

        write!(f, "{} {}", "found".dimmed(), parts.join(", "))
    }
}
