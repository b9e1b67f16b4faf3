//! Sitemap command implementation.

use std::fs;

use anyhow::{Context, Result};

use super::args::SitemapArgs;
use super::input::{PostFile, collect_definition_files, load_posts};
use crate::log;
use crate::sitemap::{Sitemap, UrlEntry, minify_xml};
use crate::utils::plural_count;

/// Execute sitemap command
pub fn run_sitemap(args: &SitemapArgs) -> Result<()> {
    crate::logger::set_verbose(args.verbose);

    let files = collect_definition_files(&args.paths)?;
    let posts = load_posts(&files)?;

    let urls: Vec<UrlEntry> = posts
        .iter()
        .map(|loaded| match &loaded.post {
            PostFile::Blog(post) => UrlEntry::from_post(post),
            PostFile::Grammar(topic) => UrlEntry::from_topic(topic),
        })
        .collect();

    let count = urls.len();
    let xml = Sitemap::new(urls).into_xml();
    let xml = minify_xml(xml.as_bytes(), args.minify);

    if let Some(parent) = args.output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(&args.output, &*xml)
        .with_context(|| format!("failed to write sitemap to {}", args.output.display()))?;

    log!("sitemap"; "wrote {} ({})", args.output.display(), plural_count(count, "url"));
    Ok(())
}
