//! # Output Module
//!
//! This module centralizes all user-facing output for webheader.
//!
//! The report on stdout has exactly two shapes: a banner followed by one
//! ` - <path>` line per changed file, or a single "nothing to do" line. Paths
//! are relative to the scan root and sorted. Colors only touch the banner lines,
//! and only when stdout supports them, so the report stays scriptable.

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::RunSummary;

/// Banner printed before the list of rewritten files.
pub const UPDATED_BANNER: &str = "Updated headers for:";

/// Banner printed before the list of files a dry run would rewrite.
pub const PENDING_BANNER: &str = "Headers would be updated for:";

/// Message printed when no file needed a header.
pub const NOTHING_TO_DO: &str = "No header updates needed.";

/// Banner heading the list of changed files.
pub const fn banner(dry_run: bool) -> &'static str {
  if dry_run { PENDING_BANNER } else { UPDATED_BANNER }
}

/// Print the run report to stdout.
pub fn print_report(summary: &RunSummary) {
  if is_quiet() {
    return;
  }

  if !summary.has_changes() {
    println!("{}", NOTHING_TO_DO.if_supports_color(Stream::Stdout, |s| s.green()));
    return;
  }

  println!("{}", banner(summary.dry_run).if_supports_color(Stream::Stdout, |s| s.yellow()));
  for path in &summary.changed {
    println!(" - {}", path.display());
  }
}

/// Print the counters of a run to stderr. Only shown in verbose mode.
pub fn print_summary(summary: &RunSummary) {
  if !is_verbose() {
    return;
  }

  eprintln!(
    "Summary: {} files seen, {} candidates, {} changed ({} replaced an old header), {} already licensed, {} skipped ({:.2}s)",
    summary.files_seen,
    summary.candidates,
    summary.changed.len(),
    summary.replaced,
    summary.already_compliant,
    summary.skipped,
    summary.elapsed.as_secs_f64()
  );
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_banner() {
    assert_eq!(banner(false), "Updated headers for:");
    assert_eq!(banner(true), "Headers would be updated for:");
  }
}
