//! # webheader
//!
//! A tool that stamps the Apache 2.0 license header onto the first-party web
//! sources of a tree: Nunjucks templates, HTML, Markdown, CSS and JavaScript.
//!
//! `webheader` modifies files in place and never touches a file that already
//! carries the Apache notice, so running it again is always safe. When it
//! finds an obsolete header (MIT and a few project-specific notices) within
//! the first 40 lines of a file, it removes that block before inserting the
//! new header.
//!
//! ## Features
//!
//! * Recursively scan a directory, pruning `node_modules`, `dist`, `.git` and `.github`
//! * Pick an HTML-comment or block-comment header from the file extension
//! * Strip recognised obsolete headers
//! * Check-only mode with optional diffs to preview changes
//! * JSON report of every file seen
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! use webheader::processor::{Processor, ProcessorConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let processor = Processor::new(ProcessorConfig::new(PathBuf::from("site")));
//!
//!     let outcome = processor.process()?;
//!     for path in &outcome.summary.changed {
//!         println!("updated {}", path.display());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Walking the tree and rewriting files
//! * [`templates`] - Header styles and header text
//! * [`file_filter`] - Skip rules and the eligibility filter
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`processor`]: crate::processor
//! [`templates`]: crate::templates
//! [`file_filter`]: crate::file_filter
//! [`logging`]: crate::logging

pub mod cli;
pub mod diff;
pub mod file_filter;
pub mod license_detection;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod templates;
pub mod workspace;
