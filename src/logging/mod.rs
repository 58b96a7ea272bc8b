//! # Logging Module
//!
//! This module provides logging utilities for webheader, including:
//! - Verbose logging that can be enabled/disabled
//! - Output modes and color control shared with the console report
//! - Initialization of the `tracing` subscriber used by the library
//!
//! Verbose logs and tracing output go to stderr. Only the run report is
//! written to stdout, so it stays scriptable.
//!
//! ## Example
//!
//! ```rust
//! use webheader::logging::{ColorMode, set_verbose};
//! use webheader::verbose_log;
//!
//! // Enable verbose logging
//! set_verbose();
//!
//! // Set color mode to Auto (uses owo-colors' automatic TTY detection)
//! ColorMode::Auto.apply();
//!
//! // Log a verbose message (goes to stderr)
//! verbose_log!("Processing file: {}", "index.njk");
//! ```

mod modes;

pub use modes::{ColorMode, default_directive, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};

/// Logs a message to stderr if verbose mode is enabled.
///
/// This macro is used for detailed logging that is only shown when verbose mode
/// is enabled via [`set_verbose`]. It uses the same format string syntax as
/// the standard [`eprintln!`] macro.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}
