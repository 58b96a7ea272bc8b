//! # Content Transformer Module
//!
//! This module provides the text transformations applied to a candidate file:
//! stripping an obsolete license header and composing the new content with
//! the Apache header on top.

use std::borrow::Cow;

use crate::license_detection::find_old_header_line;
use crate::templates::HeaderStyle;

/// Result of rewriting a file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
  /// The complete new file content
  pub content: String,
  /// Whether an obsolete header was removed on the way
  pub replaced_old_header: bool,
}

/// Content transformation utilities for header processing.
///
/// The `ContentTransformer` handles:
/// - Removing an obsolete header block found near the top of a file
/// - Prepending the header for a given [`HeaderStyle`]
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentTransformer;

impl ContentTransformer {
  pub const fn new() -> Self {
    ContentTransformer
  }

  /// Removes an obsolete header from the top of `content`.
  ///
  /// The first line among the leading 40 that contains an old-header
  /// signature starts the header. It ends at the next blank (or
  /// whitespace-only) line after it, or at end of file when there is none.
  /// Everything up to and including that end is dropped, along with any blank
  /// lines that immediately follow. Remaining lines are rejoined with `\n`.
  ///
  /// Content without a signature is returned borrowed and untouched.
  ///
  /// A signature with no blank line after it removes the rest of the file.
  pub fn strip_old_header<'a>(&self, content: &'a str) -> Cow<'a, str> {
    let lines: Vec<&str> = content.lines().collect();

    let Some(start) = find_old_header_line(&lines) else {
      return Cow::Borrowed(content);
    };

    let header_end = lines
      .iter()
      .enumerate()
      .skip(start + 1)
      .find(|(_, line)| line.trim().is_empty())
      .map_or(lines.len(), |(idx, _)| idx + 1);

    let remaining: Vec<&str> = lines[header_end..]
      .iter()
      .copied()
      .skip_while(|line| line.trim().is_empty())
      .collect();

    Cow::Owned(remaining.join("\n"))
  }

  /// Prepends the header for `style` to `body`.
  ///
  /// The header is followed by one blank line. Trailing whitespace of the
  /// result is trimmed and a single newline appended.
  pub fn compose(&self, style: HeaderStyle, body: &str) -> String {
    let mut content = format!("{}\n{}", style.header(), body);
    let trimmed_len = content.trim_end().len();
    content.truncate(trimmed_len);
    content.push('\n');
    content
  }

  /// Strips any obsolete header and composes the new content.
  pub fn rewrite(&self, content: &str, style: HeaderStyle) -> Rewrite {
    let stripped = self.strip_old_header(content);
    let replaced_old_header = matches!(stripped, Cow::Owned(_));
    Rewrite {
      content: self.compose(style, &stripped),
      replaced_old_header,
    }
  }
}
