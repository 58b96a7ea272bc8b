//! # Report Module
//!
//! This module records what happened to every file seen during a run and can
//! write that record as a JSON report.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::templates::HeaderStyle;

/// Information about a processed file for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
  /// Path to the file, relative to the scan root
  #[serde(serialize_with = "serialize_path")]
  pub path: PathBuf,
  /// Header style resolved for the file, if it was a candidate
  pub style: Option<HeaderStyle>,
  /// Action taken on the file
  pub action: FileAction,
  /// Reason the file was skipped, if applicable
  #[serde(skip_serializing_if = "Option::is_none")]
  pub skipped_reason: Option<String>,
}

/// Possible actions taken on a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
  /// Header was added (or would be, in check mode)
  Added,
  /// An obsolete header was stripped and the new header added
  Replaced,
  /// File already carried the Apache header
  Unchanged,
  /// File was not a candidate
  Skipped,
}

impl FileAction {
  /// Whether the file's content was (or would be) rewritten.
  pub const fn is_change(self) -> bool {
    matches!(self, Self::Added | Self::Replaced)
  }
}

fn serialize_path<S>(path: &Path, serializer: S) -> Result<S::Ok, S::Error>
where
  S: serde::Serializer,
{
  serializer.serialize_str(&path.to_string_lossy().replace('\\', "/"))
}

/// Summary of one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
  /// Relative paths of changed files, sorted
  #[serde(serialize_with = "serialize_paths")]
  pub changed: Vec<PathBuf>,
  /// Number of regular files found by the walk
  pub files_seen: usize,
  /// Number of files that passed the eligibility filter
  pub candidates: usize,
  /// Number of candidates that got an obsolete header replaced
  pub replaced: usize,
  /// Number of candidates that already had the header
  pub already_compliant: usize,
  /// Number of files rejected by the eligibility filter
  pub skipped: usize,
  /// Whether files were left untouched (check mode)
  pub dry_run: bool,
  /// Wall-clock time of the run
  #[serde(serialize_with = "serialize_duration")]
  pub elapsed: Duration,
}

fn serialize_paths<S>(paths: &[PathBuf], serializer: S) -> Result<S::Ok, S::Error>
where
  S: serde::Serializer,
{
  serializer.collect_seq(paths.iter().map(|p| p.to_string_lossy().replace('\\', "/")))
}

fn serialize_duration<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
  S: serde::Serializer,
{
  serializer.serialize_f64(duration.as_secs_f64())
}

impl RunSummary {
  /// Builds the summary from per-file reports.
  pub fn from_reports(reports: &[FileReport], elapsed: Duration, dry_run: bool) -> Self {
    let mut changed: Vec<PathBuf> = reports
      .iter()
      .filter(|r| r.action.is_change())
      .map(|r| r.path.clone())
      .collect();
    changed.sort();

    let count = |action: FileAction| reports.iter().filter(|r| r.action == action).count();
    let skipped = count(FileAction::Skipped);

    Self {
      changed,
      files_seen: reports.len(),
      candidates: reports.len() - skipped,
      replaced: count(FileAction::Replaced),
      already_compliant: count(FileAction::Unchanged),
      skipped,
      dry_run,
      elapsed,
    }
  }

  /// Whether any file changed (or would change).
  pub fn has_changes(&self) -> bool {
    !self.changed.is_empty()
  }
}

#[derive(Serialize)]
struct JsonReport<'a> {
  summary: &'a RunSummary,
  files: &'a [FileReport],
}

/// Writes the JSON report for a run to `output_path`.
pub fn write_json_report(output_path: &Path, files: &[FileReport], summary: &RunSummary) -> Result<()> {
  let report = JsonReport { summary, files };
  let content = serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")?;
  fs::write(output_path, content).with_context(|| format!("Failed to write report to {}", output_path.display()))
}
