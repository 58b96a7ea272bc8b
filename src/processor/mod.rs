//! # Processor Module
//!
//! This module contains the header rewriter: it walks the scan root, decides
//! for every file whether it needs the Apache header, rewrites it in place
//! and records what it did.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and writing operations
//! - [`content_transformer`] - Old-header stripping and header composition
//! - [`file_collector`] - Directory traversal with skip-directory pruning
//!
//! The [`Processor`] struct is the main entry point, orchestrating the
//! submodules. Files are handled one at a time, in walk order.

mod content_transformer;
mod file_collector;
mod file_io;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
pub use content_transformer::{ContentTransformer, Rewrite};
pub use file_collector::{FileCollector, relative_to_root};
pub use file_io::FileIO;
use tracing::{debug, trace};

use crate::diff::DiffManager;
use crate::file_filter::{Eligibility, EligibilityFilter};
use crate::license_detection::{ApacheMarkerDetector, LicenseDetector};
use crate::report::{FileAction, FileReport, RunSummary};
use crate::templates::HeaderStyle;
use crate::verbose_log;

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  /// Directory to scan
  pub root: PathBuf,

  /// Only report what would change, never write
  pub check_only: bool,

  /// Diff rendering for changed files
  pub diff_manager: DiffManager,

  /// Detector for files that already carry the header
  pub license_detector: Option<Box<dyn LicenseDetector>>,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig for `root` with sensible defaults.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     check_only: true,
  ///     ..ProcessorConfig::new(root)
  /// }
  /// ```
  pub fn new(root: PathBuf) -> Self {
    Self {
      root,
      check_only: false,
      diff_manager: DiffManager::default(),
      license_detector: None,
    }
  }
}

/// Outcome of a full run.
#[derive(Debug)]
pub struct RunOutcome {
  /// Per-file reports, in walk order
  pub reports: Vec<FileReport>,
  /// Aggregated summary, including the sorted changed paths
  pub summary: RunSummary,
}

/// Processor for stamping license headers onto files.
///
/// The `Processor` is responsible for:
/// - Walking the scan root, pruning skip-listed directories
/// - Filtering out skip-listed files and unsupported extensions
/// - Leaving files that already carry the Apache header alone
/// - Stripping obsolete headers and writing the new header
/// - Showing diffs and collecting report data about processed files
pub struct Processor {
  /// Root of the scan.
  root: PathBuf,

  /// Eligibility rules for discovered files
  eligibility: EligibilityFilter,

  /// Whether to only check without modifying files
  check_only: bool,

  /// Manager for diff rendering
  diff_manager: DiffManager,

  /// License detector for checking if files already have the header
  license_detector: Box<dyn LicenseDetector>,

  /// Content transformer for stripping and composing headers
  content_transformer: ContentTransformer,

  /// File collector for directory traversal
  file_collector: FileCollector,
}

impl Processor {
  /// Creates a new processor with the specified configuration.
  pub fn new(config: ProcessorConfig) -> Self {
    let license_detector = config
      .license_detector
      .unwrap_or_else(|| Box::new(ApacheMarkerDetector::new()));

    Self {
      eligibility: EligibilityFilter::new(config.root.clone()),
      check_only: config.check_only,
      diff_manager: config.diff_manager,
      license_detector,
      content_transformer: ContentTransformer::new(),
      file_collector: FileCollector::new(config.root.clone()),
      root: config.root,
    }
  }

  /// Whether this processor leaves files untouched.
  pub const fn is_check_only(&self) -> bool {
    self.check_only
  }

  /// Walks the root and processes every file found.
  ///
  /// # Errors
  ///
  /// The first walk, read or write error aborts the run. Files rewritten
  /// before the failure keep their new content.
  pub fn process(&self) -> Result<RunOutcome> {
    let start_time = Instant::now();
    let files = self.file_collector.traverse_directory()?;

    let mut reports = Vec::with_capacity(files.len());
    for path in &files {
      reports.push(self.process_file(path)?);
    }

    let summary = RunSummary::from_reports(&reports, start_time.elapsed(), self.check_only);
    debug!(
      "Processed {} files ({} changed) in {}ms",
      summary.files_seen,
      summary.changed.len(),
      summary.elapsed.as_millis()
    );

    Ok(RunOutcome { reports, summary })
  }

  /// Processes a single file: filter, marker check, strip, compose, write.
  ///
  /// `path` may be absolute or relative to the current directory; the
  /// returned report holds the path relative to the scan root.
  pub fn process_file(&self, path: &Path) -> Result<FileReport> {
    let relative = relative_to_root(path, &self.root);

    let style = match self.eligibility.classify(path)? {
      Eligibility::Candidate(style) => style,
      Eligibility::Rejected(reason) => {
        return Ok(FileReport {
          path: relative,
          style: None,
          action: FileAction::Skipped,
          skipped_reason: Some(reason),
        });
      }
    };

    verbose_log!("Processing file: {}", relative.display());
    let content = FileIO::read_full_content(path)?;

    if self.license_detector.has_license(&content) {
      trace!("Header already present: {}", relative.display());
      return Ok(Self::report(relative, style, FileAction::Unchanged));
    }

    let rewrite = self.content_transformer.rewrite(&content, style);
    self.diff_manager.display_diff(&relative, &content, &rewrite.content);

    if !self.check_only {
      FileIO::write_file(path, &rewrite.content)?;
    }

    let action = if rewrite.replaced_old_header {
      debug!("Replaced obsolete header in: {}", relative.display());
      FileAction::Replaced
    } else {
      debug!("Added header to: {}", relative.display());
      FileAction::Added
    };

    Ok(Self::report(relative, style, action))
  }

  fn report(path: PathBuf, style: HeaderStyle, action: FileAction) -> FileReport {
    FileReport {
      path,
      style: Some(style),
      action,
      skipped_reason: None,
    }
  }
}
