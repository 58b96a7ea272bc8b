//! # Run Command
//!
//! This module implements the header rewrite command, the only thing the
//! binary does.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use crate::diff::DiffManager;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{print_report, print_summary};
use crate::processor::{Processor, ProcessorConfig};
use crate::report::write_json_report;
use crate::workspace::resolve_workspace;

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
  /// Directory to scan. Defaults to the directory two levels above the
  /// webheader executable.
  #[arg(value_name = "ROOT")]
  pub root: Option<PathBuf>,

  /// Check mode: report files that need a header without modifying them.
  /// Exits with status 1 when any file would change.
  #[arg(long)]
  pub check: bool,

  /// Print a diff of every rewritten file to stderr
  #[arg(long)]
  pub show_diff: bool,

  /// Write a JSON report of the run to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the header rewrite with the given arguments
pub fn run(args: RunArgs) -> Result<()> {
  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set output mode for the report and the verbose_log! macro
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let workspace = resolve_workspace(args.root.as_deref()).context("Failed to resolve the scan root")?;
  debug!("Scanning {}", workspace.root().display());

  let processor = Processor::new(ProcessorConfig {
    check_only: args.check,
    diff_manager: DiffManager::new(args.show_diff),
    ..ProcessorConfig::new(workspace.into_root())
  });

  let outcome = processor.process()?;

  print_report(&outcome.summary);
  print_summary(&outcome.summary);

  if let Some(ref output_path) = args.report_json {
    write_json_report(output_path, &outcome.reports, &outcome.summary)?;
    info!("Generated JSON report at {}", output_path.display());
  }

  // Exit with non-zero code if in check mode and there are pending changes
  if processor.is_check_only() && outcome.summary.has_changes() {
    process::exit(1);
  }

  Ok(())
}
