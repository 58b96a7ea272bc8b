//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the processor.
//! It encapsulates synchronous file operations.

use std::path::Path;

use anyhow::{Context, Result};

/// File I/O operations for the processor.
///
/// This struct provides static methods for reading and writing files.
pub struct FileIO;

impl FileIO {
  /// Read full file content as UTF-8 with line endings normalized to `\n`.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to read
  ///
  /// # Returns
  ///
  /// The complete file content as a String. Invalid UTF-8 is an error.
  pub fn read_full_content(path: &Path) -> Result<String> {
    let content =
      std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(normalize_line_endings(content))
  }

  /// Overwrite a file in place.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to write
  /// * `content` - Content to write to the file
  pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
fn normalize_line_endings(content: String) -> String {
  if !content.contains('\r') {
    return content;
  }
  content.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_round_trip_and_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");

    FileIO::write_file(&path, "<p>hi</p>\n").unwrap();
    assert_eq!(FileIO::read_full_content(&path).unwrap(), "<p>hi</p>\n");

    std::fs::write(&path, [0x3c, 0xff, 0xfe, 0x3e]).unwrap();
    let err = FileIO::read_full_content(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
  }

  #[test]
  fn test_read_normalizes_line_endings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.js");

    std::fs::write(&path, "a\r\nb\rc\n\r\n").unwrap();
    assert_eq!(FileIO::read_full_content(&path).unwrap(), "a\nb\nc\n\n");
  }

  #[test]
  fn test_normalize_line_endings() {
    assert_eq!(normalize_line_endings("one\ntwo\n".to_string()), "one\ntwo\n");
    assert_eq!(normalize_line_endings("one\r\ntwo\r\n".to_string()), "one\ntwo\n");
    assert_eq!(normalize_line_endings("one\rtwo\r".to_string()), "one\ntwo\n");
    assert_eq!(normalize_line_endings("\r\r\n".to_string()), "\n\n");
  }
}
