//! Audit command implementation.

use anyhow::Result;

use super::args::AuditArgs;
use super::input::{PostFile, collect_definition_files, load_posts};
use crate::audit::{AuditReport, audit_post, audit_topic};
use crate::log;
use crate::utils::plural_count;

/// Execute audit command
pub fn run_audit(args: &AuditArgs) -> Result<()> {
    crate::logger::set_verbose(args.verbose);

    let files = collect_definition_files(&args.paths)?;
    log!("audit"; "checking {}", plural_count(files.len(), "definition"));

    let posts = load_posts(&files)?;

    let mut report = AuditReport::default();
    for loaded in &posts {
        let issues = match &loaded.post {
            PostFile::Blog(post) => audit_post(post),
            PostFile::Grammar(topic) => audit_topic(topic),
        };
        report.add(loaded.path.display().to_string(), issues);
    }

    report.print();
    log!("audit"; "{report}");

    if report.error_count() > 0 && !args.warn_only {
        anyhow::bail!(
            "found {} with seo errors",
            plural_count(report.error_file_count(), "file")
        );
    }

    Ok(())
}
