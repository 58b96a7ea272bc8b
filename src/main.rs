//! # webheader
//!
//! Stamps the Apache 2.0 license header onto first-party web sources.

use anyhow::Result;
use webheader::cli::{Cli, run};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run(cli.run_args)
}
