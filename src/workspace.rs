//! # Workspace Module
//!
//! This module resolves the directory webheader scans.
//!
//! The tool is meant to be installed inside the tree it maintains, at
//! `<root>/<tools-dir>/webheader`, so by default the root is the directory two
//! levels above the executable. An explicit root overrides that.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Error type for scan-root resolution.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
  /// The running executable's path could not be determined.
  #[error("Failed to locate the running executable: {0}")]
  CurrentExe(#[source] std::io::Error),

  /// The executable does not sit two levels below any directory.
  #[error("Executable '{}' has no directory two levels above it", .0.display())]
  NoAncestor(PathBuf),

  /// The root could not be canonicalized.
  #[error("Failed to resolve scan root '{}': {source}", .path.display())]
  Canonicalize { path: PathBuf, source: std::io::Error },

  /// The root exists but is not a directory.
  #[error("Scan root '{}' is not a directory", .0.display())]
  NotADirectory(PathBuf),
}

/// Resolved scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
  root: PathBuf,
}

impl Workspace {
  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn into_root(self) -> PathBuf {
    self.root
  }
}

/// Resolve the scan root, from `explicit` when given, otherwise from the
/// location of the running executable.
pub fn resolve_workspace(explicit: Option<&Path>) -> Result<Workspace, WorkspaceError> {
  let candidate = match explicit {
    Some(path) => path.to_path_buf(),
    None => {
      let exe = std::env::current_exe().map_err(WorkspaceError::CurrentExe)?;
      root_from_executable(&exe)?
    }
  };

  let root = candidate.canonicalize().map_err(|source| WorkspaceError::Canonicalize {
    path: candidate.clone(),
    source,
  })?;

  if !root.is_dir() {
    return Err(WorkspaceError::NotADirectory(root));
  }

  debug!("Using scan root: {}", root.display());
  Ok(Workspace { root })
}

/// The directory two levels above `exe`, i.e. the parent of the directory
/// holding the executable.
pub fn root_from_executable(exe: &Path) -> Result<PathBuf, WorkspaceError> {
  exe
    .parent()
    .and_then(Path::parent)
    .filter(|ancestor| !ancestor.as_os_str().is_empty())
    .map(Path::to_path_buf)
    .ok_or_else(|| WorkspaceError::NoAncestor(exe.to_path_buf()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_root_from_executable() {
    let root = root_from_executable(Path::new("/srv/site/tools/webheader")).unwrap();
    assert_eq!(root, PathBuf::from("/srv/site"));
  }

  #[test]
  fn test_root_from_executable_too_shallow() {
    let err = root_from_executable(Path::new("webheader")).unwrap_err();
    assert!(matches!(err, WorkspaceError::NoAncestor(_)));
  }

  #[test]
  fn test_resolve_explicit_root() {
    let dir = tempfile::tempdir().unwrap();
    let workspace = resolve_workspace(Some(dir.path())).unwrap();
    assert_eq!(workspace.root(), dir.path().canonicalize().unwrap());
  }

  #[test]
  fn test_resolve_defaults_to_two_levels_above_executable() {
    let exe = std::env::current_exe().unwrap();
    let expected = root_from_executable(&exe).unwrap().canonicalize().unwrap();

    let workspace = resolve_workspace(None).unwrap();
    assert_eq!(workspace.root(), expected);
    assert!(workspace.root().is_dir());
  }

  #[test]
  fn test_resolve_rejects_file_and_missing_root() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("index.html");
    std::fs::write(&file, "").unwrap();

    assert!(matches!(
      resolve_workspace(Some(file.as_path())),
      Err(WorkspaceError::NotADirectory(_))
    ));
    assert!(matches!(
      resolve_workspace(Some(dir.path().join("missing").as_path())),
      Err(WorkspaceError::Canonicalize { .. })
    ));
  }
}
