//! # File Collector Module
//!
//! This module walks the scan root and collects regular files, pruning the
//! skip-listed directories before descending into them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::file_filter::is_skip_dir;

/// File collector for directory traversal.
pub struct FileCollector {
  /// Root of the scan
  root: PathBuf,
}

impl FileCollector {
  /// Creates a new FileCollector rooted at `root`.
  pub const fn new(root: PathBuf) -> Self {
    Self { root }
  }

  /// Traverses the root recursively and collects all regular files.
  ///
  /// Directories named in the skip list are pruned, so nothing below them is
  /// visited. The root itself is never pruned. Symlinked directories are not
  /// descended into. A symlink to a regular file is returned (by its link
  /// path) when its target resolves inside the root; dangling links and links
  /// leaving the root are skipped. Entries come back in the order the
  /// platform lists them.
  ///
  /// # Errors
  ///
  /// Any error reading a directory aborts the traversal.
  pub fn traverse_directory(&self) -> Result<Vec<PathBuf>> {
    let mut all_files = Vec::with_capacity(1000);

    debug!("Scanning directory: {}", self.root.display());
    let start_time = std::time::Instant::now();

    // Missing roots fail in the walk below with a proper context
    let canonical_root = self.root.canonicalize().unwrap_or_else(|_| self.root.clone());

    let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| !is_pruned(entry));
    for entry in walker {
      let entry = entry.with_context(|| format!("Failed to walk directory: {}", self.root.display()))?;
      let file_type = entry.file_type();
      if file_type.is_file() || (file_type.is_symlink() && links_to_file_inside(entry.path(), &canonical_root)) {
        all_files.push(entry.into_path());
      }
    }

    debug!(
      "Found {} files in {}ms",
      all_files.len(),
      start_time.elapsed().as_millis()
    );

    Ok(all_files)
  }
}

fn is_pruned(entry: &DirEntry) -> bool {
  if entry.depth() == 0 || !entry.file_type().is_dir() {
    return false;
  }

  let pruned = entry.file_name().to_str().is_some_and(is_skip_dir);
  if pruned {
    trace!("Pruning directory: {}", entry.path().display());
  }
  pruned
}

/// Whether the symlink at `link` resolves to a regular file below
/// `canonical_root`.
fn links_to_file_inside(link: &Path, canonical_root: &Path) -> bool {
  let inside = link
    .canonicalize()
    .is_ok_and(|target| target.is_file() && target.starts_with(canonical_root));
  if !inside {
    trace!("Skipping symlink: {}", link.display());
  }
  inside
}

/// Returns `path` relative to `root` for display and reporting.
///
/// Falls back to a `..`-style relative path, and finally to the path itself,
/// when `path` does not live under `root`.
pub fn relative_to_root(path: &Path, root: &Path) -> PathBuf {
  if let Ok(stripped) = path.strip_prefix(root) {
    return stripped.to_path_buf();
  }

  pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf())
}
