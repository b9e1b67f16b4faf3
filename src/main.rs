//! gems-seo - SEO metadata toolkit for the Language Gems site.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use gems_seo::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Emit { args } => cli::emit::run_emit(args),
        Commands::Audit { args } => cli::audit::run_audit(args),
        Commands::Sitemap { args } => cli::sitemap::run_sitemap(args),
    }
}
