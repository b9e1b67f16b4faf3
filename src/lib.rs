//! SEO metadata and structured data generation for languagegems.com.
//!
//! `meta` builds the three documents every page carries: head metadata,
//! a schema.org article document, and a breadcrumb trail. `head`
//! renders them as `<head>` markup, `audit` lints definitions for SEO
//! defects, `sitemap` assembles sitemap.xml, and `cli` wraps it all in
//! the `gems-seo` binary.

pub mod audit;
pub mod cli;
pub mod head;
pub mod jsonld;
pub mod logger;
pub mod meta;
pub mod site;
pub mod sitemap;
pub mod utils;
