use std::process::Command;

fn main() {
  embed_build_info();
  set_rerun_conditions();
}

fn git_output(args: &[&str]) -> Option<String> {
  let output = Command::new("git").args(args).output().ok()?;
  if !output.status.success() {
    return None;
  }
  let value = String::from_utf8(output.stdout).ok()?.trim().to_string();
  (!value.is_empty()).then_some(value)
}

fn embed_build_info() {
  // Capture the current Git commit hash and its date for `--version`.
  // Falls back gracefully if Git is unavailable or not in a repository.
  let version = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();
  let hash = git_output(&["rev-parse", "--short", "HEAD"]);
  let date = git_output(&["log", "-1", "--format=%cs"]);

  if let (Some(hash), Some(date)) = (hash, date) {
    println!("cargo:rustc-env=WEBHEADER_LONG_VERSION={version} ({hash} {date})");
  }
}

fn set_rerun_conditions() {
  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=.git/HEAD");
}
