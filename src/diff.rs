//! # Diff Module
//!
//! This module renders line diffs between a file's current content and the
//! content the rewriter produces for it.

use std::fmt::Write as _;
use std::path::Path;

use owo_colors::{OwoColorize, Stream};
use similar::{ChangeTag, TextDiff};

/// Manages diff rendering for header changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiffManager {
  /// Whether to print diffs to stderr
  pub show_diff: bool,
}

impl DiffManager {
  /// Creates a new DiffManager.
  pub const fn new(show_diff: bool) -> Self {
    Self { show_diff }
  }

  /// Renders the diff between `original` and `new` as plain text.
  ///
  /// Each line is prefixed with `-`, `+` or a space, after a
  /// `Diff for <path>:` heading.
  pub fn render_diff(path: &Path, original: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(original, new);

    let mut diff_content = String::new();
    let _ = writeln!(diff_content, "Diff for {}:", path.display());

    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };
      diff_content.push_str(sign);
      diff_content.push_str(change.value());
      if change.missing_newline() {
        diff_content.push('\n');
      }
    }

    diff_content
  }

  /// Prints the diff to stderr if diffs were requested.
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) {
    if !self.show_diff {
      return;
    }

    for line in Self::render_diff(path, original, new).lines() {
      if line.starts_with('+') {
        eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.green()));
      } else if line.starts_with('-') {
        eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.red()));
      } else {
        eprintln!("{}", line);
      }
    }
    eprintln!();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_render_diff() {
    let diff = DiffManager::render_diff(Path::new("app.js"), "// MIT License\n\nrun();\n", "/* header */\n\nrun();\n");
    assert!(diff.starts_with("Diff for app.js:\n"));
    assert!(diff.contains("-// MIT License\n"));
    assert!(diff.contains("+/* header */\n"));
    assert!(diff.contains(" run();\n"));
  }

  #[test]
  fn test_render_diff_without_trailing_newline() {
    let diff = DiffManager::render_diff(Path::new("a.css"), "body {}", "/* x */\nbody {}\n");
    assert!(diff.ends_with('\n'));
    assert!(diff.contains("-body {}\n"));
  }
}
