//! # File Filter Module
//!
//! This module contains the skip rules and the eligibility filter that decide
//! which discovered files may receive a header.

use std::path::{Component, Path, PathBuf};

use anyhow::Result;
use tracing::trace;

use crate::templates::HeaderStyle;

/// Directories that are never descended into.
pub const SKIP_DIRS: &[&str] = &["node_modules", "dist", ".git", ".github"];

/// Exact basenames that are never touched, whatever their extension.
pub const SKIP_FILES: &[&str] = &["LICENSE", "LICENSE-COMMERCIAL", "TRADEMARKS.md"];

/// Returns `true` if a directory with this name must be pruned from the walk.
pub fn is_skip_dir(name: &str) -> bool {
  SKIP_DIRS.contains(&name)
}

/// Result of a file filtering operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
  /// Whether the file should be processed
  pub should_process: bool,
  /// Reason why the file should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the file should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the file should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter files based on certain criteria.
pub trait FileFilter {
  /// Determines whether a file should be processed.
  ///
  /// # Parameters
  ///
  /// * `path` - The path to the file to check
  ///
  /// # Returns
  ///
  /// A `FilterResult` indicating whether the file should be processed and why
  /// not if applicable.
  fn should_process(&self, path: &Path) -> Result<FilterResult>;
}

/// Rejects the license and trademark files listed in [`SKIP_FILES`].
pub struct SkipFileFilter;

impl FileFilter for SkipFileFilter {
  fn should_process(&self, path: &Path) -> Result<FilterResult> {
    let skipped = path
      .file_name()
      .and_then(|name| name.to_str())
      .is_some_and(|name| SKIP_FILES.contains(&name));

    if skipped {
      Ok(FilterResult::skip("Skip-listed file"))
    } else {
      Ok(FilterResult::process())
    }
  }
}

/// Rejects files that live below one of the [`SKIP_DIRS`].
///
/// Only the part of the path below `root` is inspected, so a scan root that
/// happens to sit inside a directory called `dist` is still processed.
pub struct SkipDirFilter {
  root: PathBuf,
}

impl SkipDirFilter {
  pub const fn new(root: PathBuf) -> Self {
    Self { root }
  }
}

impl FileFilter for SkipDirFilter {
  fn should_process(&self, path: &Path) -> Result<FilterResult> {
    let relative = path.strip_prefix(&self.root).unwrap_or(path);
    let parent = relative.parent().unwrap_or(Path::new(""));

    let inside_skip_dir = parent.components().any(|component| match component {
      Component::Normal(name) => name.to_str().is_some_and(is_skip_dir),
      _ => false,
    });

    if inside_skip_dir {
      Ok(FilterResult::skip("Inside skip-listed directory"))
    } else {
      Ok(FilterResult::process())
    }
  }
}

/// Filter that combines multiple filters.
pub struct CompositeFilter {
  filters: Vec<Box<dyn FileFilter>>,
}

impl CompositeFilter {
  /// Creates a new CompositeFilter with the given filters.
  pub fn new(filters: Vec<Box<dyn FileFilter>>) -> Self {
    Self { filters }
  }
}

impl FileFilter for CompositeFilter {
  fn should_process(&self, path: &Path) -> Result<FilterResult> {
    for filter in &self.filters {
      let result = filter.should_process(path)?;
      if !result.should_process {
        return Ok(result);
      }
    }
    Ok(FilterResult::process())
  }
}

/// Outcome of the eligibility check for one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
  /// The file is a candidate and gets a header of this style.
  Candidate(HeaderStyle),
  /// The file is left alone.
  Rejected(String),
}

/// Eligibility filter applying the skip rules in order: skip-listed basename,
/// skip-listed ancestor directory, then extension lookup.
pub struct EligibilityFilter {
  skip_rules: CompositeFilter,
}

impl EligibilityFilter {
  /// Creates the filter for files below `root`.
  pub fn new(root: PathBuf) -> Self {
    let filters: Vec<Box<dyn FileFilter>> = vec![Box::new(SkipFileFilter), Box::new(SkipDirFilter::new(root))];
    Self {
      skip_rules: CompositeFilter::new(filters),
    }
  }

  /// Classifies a path, resolving its header style when it is a candidate.
  pub fn classify(&self, path: &Path) -> Result<Eligibility> {
    let result = self.skip_rules.should_process(path)?;
    let eligibility = if result.should_process {
      HeaderStyle::for_path(path).map_or_else(
        || Eligibility::Rejected("Unsupported extension".to_string()),
        Eligibility::Candidate,
      )
    } else {
      Eligibility::Rejected(result.reason.unwrap_or_else(|| "Unknown reason".to_string()))
    };

    if let Eligibility::Rejected(reason) = &eligibility {
      trace!("Skipping: {} ({})", path.display(), reason);
    }
    Ok(eligibility)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_skip_file_filter() {
    let filter = SkipFileFilter;
    assert!(!filter.should_process(Path::new("repo/LICENSE")).unwrap().should_process);
    assert!(!filter.should_process(Path::new("repo/TRADEMARKS.md")).unwrap().should_process);
    assert!(filter.should_process(Path::new("repo/README.md")).unwrap().should_process);
    // Basenames are matched exactly
    assert!(filter.should_process(Path::new("repo/license")).unwrap().should_process);
  }

  #[test]
  fn test_skip_dir_filter_only_looks_below_root() {
    let filter = SkipDirFilter::new(PathBuf::from("/work/dist/site"));

    let result = filter.should_process(Path::new("/work/dist/site/index.html")).unwrap();
    assert!(result.should_process);

    let result = filter
      .should_process(Path::new("/work/dist/site/node_modules/pkg/index.js"))
      .unwrap();
    assert!(!result.should_process);
    assert_eq!(result.reason.as_deref(), Some("Inside skip-listed directory"));
  }

  #[test]
  fn test_skip_dir_filter_ignores_file_name() {
    let filter = SkipDirFilter::new(PathBuf::from("/work"));
    // A file literally named like a skip directory is not inside one
    assert!(filter.should_process(Path::new("/work/dist")).unwrap().should_process);
  }

  #[test]
  fn test_composite_filter() {
    struct MockFilter;
    impl FileFilter for MockFilter {
      fn should_process(&self, path: &Path) -> Result<FilterResult> {
        if path.to_string_lossy().contains("pass") {
          Ok(FilterResult::process())
        } else {
          Ok(FilterResult::skip("Not a pass file"))
        }
      }
    }

    let filters: Vec<Box<dyn FileFilter>> = vec![Box::new(SkipFileFilter), Box::new(MockFilter)];
    let composite = CompositeFilter::new(filters);

    assert!(composite.should_process(Path::new("src/pass.js")).unwrap().should_process);
    assert!(!composite.should_process(Path::new("src/fail.js")).unwrap().should_process);

    // The first rejecting filter decides the reason
    let result = composite.should_process(Path::new("pass/LICENSE")).unwrap();
    assert_eq!(result.reason.as_deref(), Some("Skip-listed file"));
  }

  #[test]
  fn test_eligibility_filter() {
    let filter = EligibilityFilter::new(PathBuf::from("/repo"));

    assert_eq!(
      filter.classify(Path::new("/repo/site/index.njk")).unwrap(),
      Eligibility::Candidate(HeaderStyle::Html)
    );
    assert_eq!(
      filter.classify(Path::new("/repo/assets/app.MJS")).unwrap(),
      Eligibility::Candidate(HeaderStyle::Code)
    );
    assert_eq!(
      filter.classify(Path::new("/repo/notes.txt")).unwrap(),
      Eligibility::Rejected("Unsupported extension".to_string())
    );
    assert_eq!(
      filter.classify(Path::new("/repo/TRADEMARKS.md")).unwrap(),
      Eligibility::Rejected("Skip-listed file".to_string())
    );
    assert_eq!(
      filter.classify(Path::new("/repo/.github/workflows/ci.md")).unwrap(),
      Eligibility::Rejected("Inside skip-listed directory".to_string())
    );
    // Skip rules win over the extension lookup
    assert_eq!(
      filter.classify(Path::new("/repo/dist/notes.txt")).unwrap(),
      Eligibility::Rejected("Inside skip-listed directory".to_string())
    );
    assert_eq!(
      filter.classify(Path::new("/repo/LICENSE")).unwrap(),
      Eligibility::Rejected("Skip-listed file".to_string())
    );
    assert_eq!(
      filter.classify(Path::new("/repo/Makefile")).unwrap(),
      Eligibility::Rejected("Unsupported extension".to_string())
    );
  }
}
