//! Post definition loading shared across CLI commands.
//!
//! Definition files are TOML documents holding `BlogPostMeta` fields;
//! a top-level `kind = "grammar"` key switches the file to
//! `GrammarTopicMeta` fields instead.

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use thiserror::Error;

use crate::meta::{BlogPostMeta, GrammarTopicMeta};

/// A parsed post definition.
#[derive(Debug, Clone, PartialEq)]
pub enum PostFile {
    Blog(BlogPostMeta),
    Grammar(GrammarTopicMeta),
}

#[derive(Debug, Error)]
pub enum PostFileError {
    #[error("not a post definition file (want `.toml`)")]
    UnsupportedExtension,
    #[error("unknown kind `{0}` (want `blog` or `grammar`)")]
    UnknownKind(String),
}

/// One loaded definition with the path it came from.
#[derive(Debug, Clone)]
pub struct LoadedPost {
    pub path: PathBuf,
    pub post: PostFile,
}

/// Parse a definition document, routing on the `kind` key
/// (absent means `blog`).
pub fn parse_post(source: &str) -> Result<PostFile> {
    let value: toml::Value = toml::from_str(source)?;
    let kind = value
        .get("kind")
        .and_then(toml::Value::as_str)
        .unwrap_or("blog")
        .to_string();

    match kind.as_str() {
        "blog" => Ok(PostFile::Blog(value.try_into()?)),
        "grammar" => Ok(PostFile::Grammar(value.try_into()?)),
        other => Err(PostFileError::UnknownKind(other.to_string()).into()),
    }
}

/// Load one definition file.
pub fn load_post_file(path: &Path) -> Result<LoadedPost> {
    if path.extension().and_then(|e| e.to_str()) != Some("toml") {
        return Err(PostFileError::UnsupportedExtension)
            .with_context(|| format!("failed to load {}", path.display()));
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let post =
        parse_post(&source).with_context(|| format!("failed to parse {}", path.display()))?;

    Ok(LoadedPost {
        path: path.to_path_buf(),
        post,
    })
}

/// Load a batch of definition files in parallel, preserving path order.
pub fn load_posts(files: &[PathBuf]) -> Result<Vec<LoadedPost>> {
    files.par_iter().map(|path| load_post_file(path)).collect()
}

/// Collect definition files from CLI paths. Files are taken as given,
/// directories are walked recursively for `*.toml` (sorted, so batch
/// output is deterministic), and a single `-` reads paths from stdin.
pub fn collect_definition_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths_from_stdin()?
    } else {
        paths.to_vec()
    };

    if paths.is_empty() {
        anyhow::bail!("no paths given (pass files, directories, or `-` for stdin)");
    }

    let mut files = Vec::new();
    for path in &paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            collect_toml_files(path, &mut files)?;
        } else {
            anyhow::bail!("path not found: {}", path.display());
        }
    }

    Ok(files)
}

fn collect_toml_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read {}", dir.display()))?
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            collect_toml_files(&path, files)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some("toml") {
            files.push(path);
        }
    }

    Ok(())
}

/// Read file paths from stdin, one per line
pub fn read_paths_from_stdin() -> Result<Vec<PathBuf>> {
    let stdin = io::stdin();
    let mut paths = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_blog_by_default() {
        let post = parse_post(
            r#"
title = "My Title"
description = "A post."
slug = "my-title"
keywords = ["a", "b"]
published-date = "2024-01-15T10:00:00Z"
"#,
        )
        .unwrap();

        match post {
            PostFile::Blog(meta) => {
                assert_eq!(meta.title, "My Title");
                assert_eq!(meta.keywords, vec!["a", "b"]);
                assert_eq!(meta.published_date.as_deref(), Some("2024-01-15T10:00:00Z"));
            }
            PostFile::Grammar(_) => panic!("expected blog"),
        }
    }

    #[test]
    fn test_parse_explicit_blog_kind() {
        let post = parse_post("kind = \"blog\"\ntitle = \"T\"").unwrap();
        assert!(matches!(post, PostFile::Blog(_)));
    }

    #[test]
    fn test_parse_grammar_kind() {
        let post = parse_post(
            r#"
kind = "grammar"
language = "spanish"
category = "verb-tenses"
topic = "present-tense"
title = "Present Tense"
description = "Conjugation basics."
difficulty = "beginner"
examples = ["hablo"]
"#,
        )
        .unwrap();

        match post {
            PostFile::Grammar(meta) => {
                assert_eq!(meta.language, "spanish");
                assert_eq!(meta.difficulty.as_deref(), Some("beginner"));
                assert_eq!(meta.examples, vec!["hablo"]);
            }
            PostFile::Blog(_) => panic!("expected grammar"),
        }
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = parse_post("kind = \"video\"").unwrap_err();
        assert!(err.to_string().contains("unknown kind `video`"));
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(parse_post("title = ").is_err());
    }

    #[test]
    fn test_load_post_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.toml");
        fs::write(&path, "title = \"T\"\nslug = \"t\"").unwrap();

        let loaded = load_post_file(&path).unwrap();
        assert_eq!(loaded.path, path);
        assert!(matches!(loaded.post, PostFile::Blog(_)));
    }

    #[test]
    fn test_load_rejects_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.md");
        fs::write(&path, "# nope").unwrap();

        let err = load_post_file(&path).unwrap_err();
        assert!(err.to_string().contains("failed to load"));
    }

    #[test]
    fn test_collect_walks_directories_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.toml"), "").unwrap();
        fs::write(dir.path().join("a.toml"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join("nested/c.toml"), "").unwrap();

        let files = collect_definition_files(&[dir.path().to_path_buf()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["a.toml", "b.toml", "nested/c.toml"]);
    }

    #[test]
    fn test_collect_requires_paths() {
        assert!(collect_definition_files(&[]).is_err());
    }

    #[test]
    fn test_collect_missing_path() {
        let err = collect_definition_files(&[PathBuf::from("does/not/exist.toml")]).unwrap_err();
        assert!(err.to_string().contains("path not found"));
    }

    #[test]
    fn test_load_posts_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["one", "two", "three"] {
            fs::write(
                dir.path().join(format!("{name}.toml")),
                format!("title = \"{name}\""),
            )
            .unwrap();
        }

        let files = vec![
            dir.path().join("two.toml"),
            dir.path().join("one.toml"),
            dir.path().join("three.toml"),
        ];
        let posts = load_posts(&files).unwrap();
        let titles: Vec<_> = posts
            .iter()
            .map(|l| match &l.post {
                PostFile::Blog(meta) => meta.title.clone(),
                PostFile::Grammar(meta) => meta.title.clone(),
            })
            .collect();

        assert_eq!(titles, vec!["two", "one", "three"]);
    }
}
