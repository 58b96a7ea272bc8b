#![allow(dead_code)]

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: impl AsRef<[u8]>) -> Result<()> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Reads `root/relative` as UTF-8.
pub fn read_file(root: &Path, relative: &str) -> Result<String> {
  let path = root.join(relative);
  fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Creates a small site tree covering every skip rule and both header styles.
///
/// Layout:
/// - `index.njk`, `docs/guide.md`, `css/site.css`: html-style candidates
/// - `js/app.js`: code-style candidate with an MIT header
/// - `js/already.mjs`: already carries the Apache notice
/// - `notes.txt`: unsupported extension
/// - `TRADEMARKS.md`, `LICENSE`: skip-listed files
/// - `node_modules/`, `dist/`, `.github/`: skip-listed directories
pub fn setup_site() -> Result<TempDir> {
  let temp_dir = tempfile::tempdir()?;
  let root = temp_dir.path();

  write_file(root, "index.njk", "{% extends \"base.njk\" %}\n<h1>Home</h1>\n")?;
  write_file(root, "docs/guide.md", "# Guide\n\nRead me.\n")?;
  write_file(root, "css/site.css", "body { margin: 0; }\n")?;
  write_file(
    root,
    "js/app.js",
    "/*\n * MIT License\n *\n * Copyright (c) 2023 Someone\n */\n\nexport function main() {}\n",
  )?;
  write_file(
    root,
    "js/already.mjs",
    "// Licensed under the Apache License, Version 2.0\nexport const x = 1;\n",
  )?;
  write_file(root, "notes.txt", "plain notes\n")?;
  write_file(root, "TRADEMARKS.md", "# Trademarks\n")?;
  write_file(root, "LICENSE", "MIT License\n")?;
  write_file(root, "node_modules/pkg/index.js", "module.exports = 1;\n")?;
  write_file(root, "node_modules/pkg/deep/nested/readme.md", "# pkg\n")?;
  write_file(root, "dist/bundle.js", "var a=1;\n")?;
  write_file(root, ".github/workflows/notes.md", "# CI\n")?;

  Ok(temp_dir)
}
