//! Emit command implementation.
//!
//! Builds the three documents for each post definition and writes them
//! as head snippets or JSON records, to stdout or one file per post.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde_json::{Value, json};

use super::args::{EmitArgs, EmitFormat};
use super::input::{LoadedPost, PostFile, collect_definition_files, load_posts};
use crate::utils::plural_count;
use crate::{debug, head, log};

/// Execute emit command
pub fn run_emit(args: &EmitArgs) -> Result<()> {
    crate::logger::set_verbose(args.verbose);

    let files = collect_definition_files(&args.paths)?;
    log!("emit"; "building {}", plural_count(files.len(), "definition"));

    let posts = load_posts(&files)?;

    if let Some(dir) = &args.output {
        return write_files(&posts, dir, args.format, args.pretty);
    }

    match args.format {
        EmitFormat::Head => {
            let snippets: Vec<String> = posts
                .par_iter()
                .map(|loaded| head_snippet(&loaded.post))
                .collect::<Result<_>>()?;
            print!("{}", snippets.concat());
        }
        EmitFormat::Json => {
            let records: Vec<Value> = posts.iter().map(json_record).collect();
            let body = if args.pretty {
                serde_json::to_string_pretty(&records)?
            } else {
                serde_json::to_string(&records)?
            };
            println!("{body}");
        }
    }

    Ok(())
}

fn head_snippet(post: &PostFile) -> Result<String> {
    match post {
        PostFile::Blog(post) => head::blog_head(post),
        PostFile::Grammar(topic) => head::grammar_head(topic),
    }
}

/// One JSON record per post, path first like a query result.
fn json_record(loaded: &LoadedPost) -> Value {
    let path = loaded.path.display().to_string();
    match &loaded.post {
        PostFile::Blog(post) => json!({
            "path": path,
            "page": post.page_metadata(),
            "structured-data": post.structured_data(),
            "breadcrumbs": post.breadcrumbs(),
        }),
        PostFile::Grammar(topic) => json!({
            "path": path,
            "page": topic.page_metadata(),
            "structured-data": topic.structured_data(),
            "breadcrumbs": topic.breadcrumbs(),
        }),
    }
}

fn write_files(
    posts: &[LoadedPost],
    dir: &Path,
    format: EmitFormat,
    pretty: bool,
) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let outputs: Vec<(PathBuf, String)> = posts
        .par_iter()
        .map(|loaded| -> Result<(PathBuf, String)> {
            let stem = loaded
                .path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy();

            let (name, body) = match format {
                EmitFormat::Head => (format!("{stem}.head.html"), head_snippet(&loaded.post)?),
                EmitFormat::Json => {
                    let record = json_record(loaded);
                    let mut body = if pretty {
                        serde_json::to_string_pretty(&record)?
                    } else {
                        serde_json::to_string(&record)?
                    };
                    body.push('\n');
                    (format!("{stem}.json"), body)
                }
            };

            Ok((dir.join(name), body))
        })
        .collect::<Result<_>>()?;

    for (path, body) in outputs {
        fs::write(&path, body).with_context(|| format!("failed to write {}", path.display()))?;
        debug!("emit"; "{}", path.display());
    }

    log!("emit"; "wrote {} to {}", plural_count(posts.len(), "file"), dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::BlogPostMeta;

    fn loaded(slug: &str) -> LoadedPost {
        LoadedPost {
            path: PathBuf::from(format!("posts/{slug}.toml")),
            post: PostFile::Blog(BlogPostMeta {
                title: "My Title".to_string(),
                description: "A post.".to_string(),
                slug: slug.to_string(),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_json_record_shape() {
        let record = json_record(&loaded("my-title"));

        assert_eq!(record["path"], "posts/my-title.toml");
        assert_eq!(record["page"]["title"], "My Title | Language Gems");
        assert_eq!(record["structured-data"]["@type"], "BlogPosting");
        assert_eq!(
            record["breadcrumbs"]["itemListElement"][0]["name"],
            "Home"
        );
    }

    #[test]
    fn test_write_head_files() {
        let dir = tempfile::tempdir().unwrap();
        let posts = vec![loaded("first"), loaded("second")];

        write_files(&posts, dir.path(), EmitFormat::Head, false).unwrap();

        let html = fs::read_to_string(dir.path().join("first.head.html")).unwrap();
        assert!(html.contains("https://languagegems.com/blog/first"));
        assert!(dir.path().join("second.head.html").exists());
    }

    #[test]
    fn test_write_json_files() {
        let dir = tempfile::tempdir().unwrap();
        write_files(&[loaded("first")], dir.path(), EmitFormat::Json, true).unwrap();

        let body = fs::read_to_string(dir.path().join("first.json")).unwrap();
        let record: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(record["page"]["canonical"], "https://languagegems.com/blog/first");
    }
}
