//! Command-line interface module.

mod args;
pub mod audit;
pub mod emit;
pub mod input;
pub mod sitemap;

pub use args::{AuditArgs, Cli, Commands, EmitArgs, EmitFormat, SitemapArgs};
