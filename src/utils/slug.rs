//! Category and path-segment slug helpers.

/// Convert a display string to its query-parameter form: lowercase with
/// whitespace runs collapsed to single hyphens.
///
/// This is the exact transform the blog index expects for its
/// `?category=` filter, so `"GCSE Exam Preparation"` must always map to
/// `"gcse-exam-preparation"`.
pub fn query_value(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Convert a path slug back into a display name: hyphens become spaces
/// and each word gets an uppercase first letter.
///
/// Used for breadcrumb labels of intermediate grammar levels
/// (`"verb-tenses"` -> `"Verb Tenses"`).
pub fn display_name(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
