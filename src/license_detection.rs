//! # License Detection Module
//!
//! This module contains the interfaces and implementations used to recognise
//! license text in a file: the current Apache header, and the obsolete
//! headers that get replaced.

use crate::templates::APACHE_MARKER;

/// Lowercase fragments identifying an obsolete header.
pub const OLD_HEADER_SIGNATURES: &[&str] = &[
  "permission is hereby granted, free of charge",
  "mit license",
  "mind language specification",
  "community edition",
  "cone development",
];

/// Number of leading lines searched for an obsolete header.
pub const OLD_HEADER_SCAN_LINES: usize = 40;

/// Trait for license detectors.
///
/// Implementations of this trait are responsible for determining whether a file
/// already contains a license header based on its content.
pub trait LicenseDetector {
  /// Checks if the content already has a license header.
  ///
  /// # Parameters
  ///
  /// * `content` - The file content to check
  ///
  /// # Returns
  ///
  /// `true` if the content appears to have a license header, `false` otherwise.
  fn has_license(&self, content: &str) -> bool;
}

/// Detects the Apache header by its canonical sentence.
///
/// The whole content is searched and the match is case-sensitive, so a file
/// that merely mentions "apache license" in prose still gets a header.
#[derive(Debug, Default)]
pub struct ApacheMarkerDetector;

impl ApacheMarkerDetector {
  pub const fn new() -> Self {
    ApacheMarkerDetector
  }
}

impl LicenseDetector for ApacheMarkerDetector {
  fn has_license(&self, content: &str) -> bool {
    content.contains(APACHE_MARKER)
  }
}

/// Returns the index of the first line, among the first
/// [`OLD_HEADER_SCAN_LINES`], that contains an obsolete-header signature.
///
/// Matching is done on the lower-cased line.
pub fn find_old_header_line<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
  lines.iter().take(OLD_HEADER_SCAN_LINES).position(|line| {
    let lower = line.as_ref().to_lowercase();
    OLD_HEADER_SIGNATURES.iter().any(|signature| lower.contains(signature))
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_apache_marker_detector() {
    let detector = ApacheMarkerDetector::new();

    let licensed = "/*\n * Licensed under the Apache License, Version 2.0 (the \"License\");\n */\nlet a = 1;";
    assert!(detector.has_license(licensed));

    let prose = "<p>This site is licensed under the apache license, version 2.0.</p>";
    assert!(!detector.has_license(prose));

    assert!(!detector.has_license("// Copyright 2024 Someone\nlet a = 1;"));
  }

  #[test]
  fn test_find_old_header_line() {
    let lines = ["", "/*", " * The MIT License", " */"];
    assert_eq!(find_old_header_line(&lines), Some(2));

    let lines = ["<!-- Mind Language Specification -->", "# Title"];
    assert_eq!(find_old_header_line(&lines), Some(0));

    let lines = ["let a = 1;", "let b = 2;"];
    assert_eq!(find_old_header_line(&lines), None);
  }

  #[test]
  fn test_find_old_header_line_only_scans_leading_lines() {
    let mut lines: Vec<String> = (0..OLD_HEADER_SCAN_LINES).map(|i| format!("line {i}")).collect();
    lines.push("// MIT License".to_string());
    assert_eq!(find_old_header_line(&lines), None);

    lines[OLD_HEADER_SCAN_LINES - 1] = "// Community Edition".to_string();
    assert_eq!(find_old_header_line(&lines), Some(OLD_HEADER_SCAN_LINES - 1));
  }
}
