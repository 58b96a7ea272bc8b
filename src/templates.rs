//! # Templates Module
//!
//! This module holds the two header templates stamped onto web sources and
//! maps file extensions to the [`HeaderStyle`] that selects between them.
//!
//! Both templates carry the same copyright line and Apache 2.0 notice; they
//! only differ in the comment syntax wrapped around the text.

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Marker whose presence means a file already carries the Apache header.
pub const APACHE_MARKER: &str = "Licensed under the Apache License, Version 2.0";

/// Header wrapped in an HTML comment, used for markup, docs and stylesheets.
pub const HTML_HEADER: &str = r#"<!--
Copyright 2025 STARGA Inc.

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at:

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
-->
"#;

/// Header wrapped in a C-style block comment, used for scripts.
pub const CODE_HEADER: &str = r#"/*
 * Copyright 2025 STARGA Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at:
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
"#;

/// Comment flavour of the header inserted into a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
  /// `<!-- ... -->` block for njk, html, md and css files
  Html,
  /// `/* ... */` block for js, mjs and cjs files
  Code,
}

impl HeaderStyle {
  /// Resolves the style for a bare extension (no leading dot).
  ///
  /// Matching is case-insensitive. Returns `None` for extensions that never
  /// receive a header.
  pub fn from_extension(ext: &str) -> Option<Self> {
    match ext.to_ascii_lowercase().as_str() {
      "njk" | "html" | "md" | "css" => Some(Self::Html),
      "js" | "mjs" | "cjs" => Some(Self::Code),
      _ => None,
    }
  }

  /// Resolves the style for a path from its extension.
  pub fn for_path(path: &Path) -> Option<Self> {
    path.extension().and_then(|ext| ext.to_str()).and_then(Self::from_extension)
  }

  /// The header text for this style, ending with a single newline.
  pub const fn header(self) -> &'static str {
    match self {
      Self::Html => HTML_HEADER,
      Self::Code => CODE_HEADER,
    }
  }
}

impl fmt::Display for HeaderStyle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Html => write!(f, "html"),
      Self::Code => write!(f, "code"),
    }
  }
}
