//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// SEO metadata toolkit for the Language Gems site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Emit head snippets or JSON records for post definitions
    #[command(visible_alias = "e")]
    Emit {
        #[command(flatten)]
        args: EmitArgs,
    },

    /// Audit post definitions for SEO defects
    #[command(visible_alias = "a")]
    Audit {
        #[command(flatten)]
        args: AuditArgs,
    },

    /// Generate sitemap.xml over post definitions
    #[command(visible_alias = "s")]
    Sitemap {
        #[command(flatten)]
        args: SitemapArgs,
    },
}

/// Emit command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct EmitArgs {
    /// Post definition files or directories (`*.toml`).
    /// Use `-` to read paths from stdin (one per line).
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = EmitFormat::Head)]
    pub format: EmitFormat,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write one file per post into this directory instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Emit output formats.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitFormat {
    /// `<head>` markup fragment
    Head,
    /// One record per post with page, structured-data and breadcrumbs
    Json,
}

/// Audit command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct AuditArgs {
    /// Post definition files or directories.
    /// Use `-` to read paths from stdin (one per line).
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Report errors without failing the run
    #[arg(long, short = 'w')]
    pub warn_only: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Sitemap command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SitemapArgs {
    /// Post definition files or directories.
    /// Use `-` to read paths from stdin (one per line).
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Output file
    #[arg(short, long, default_value = "sitemap.xml", value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Strip whitespace from the generated XML
    #[arg(short, long)]
    pub minify: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcommand_aliases() {
        let cli = Cli::try_parse_from(["gems-seo", "e", "posts/"]).unwrap();
        assert!(matches!(cli.command, Commands::Emit { .. }));

        let cli = Cli::try_parse_from(["gems-seo", "a", "--warn-only", "posts/"]).unwrap();
        match cli.command {
            Commands::Audit { args } => assert!(args.warn_only),
            _ => panic!("expected audit"),
        }

        let cli = Cli::try_parse_from(["gems-seo", "s", "posts/"]).unwrap();
        match cli.command {
            Commands::Sitemap { args } => {
                assert_eq!(args.output, PathBuf::from("sitemap.xml"));
                assert!(!args.minify);
            }
            _ => panic!("expected sitemap"),
        }
    }

    #[test]
    fn test_emit_format_values() {
        let cli = Cli::try_parse_from(["gems-seo", "emit", "--format", "json", "a.toml"]).unwrap();
        match cli.command {
            Commands::Emit { args } => assert_eq!(args.format, EmitFormat::Json),
            _ => panic!("expected emit"),
        }

        let cli = Cli::try_parse_from(["gems-seo", "emit", "a.toml"]).unwrap();
        match cli.command {
            Commands::Emit { args } => assert_eq!(args.format, EmitFormat::Head),
            _ => panic!("expected emit"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["gems-seo", "audit", "-V", "a.toml"]).unwrap();
        match cli.command {
            Commands::Audit { args } => assert!(args.verbose),
            _ => panic!("expected audit"),
        }

        let cli = Cli::try_parse_from(["gems-seo", "--color", "never", "audit", "a.toml"]).unwrap();
        assert_eq!(cli.color, ColorChoice::Never);
    }
}
