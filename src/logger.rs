//! Logging utilities with colored module prefixes.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for verbose-gated output
//!
//! # Example
//!
//! ```ignore
//! log!("add"; "optimizing {}", path.display());
//! debug!("store"; "skipping unparsable metadata: {}", e);
//! ```

use owo_colors::{OwoColorize, Stream::Stdout};
use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    println!("{prefix} {message}");
}

/// Apply color to a module prefix based on module type.
///
/// Honors the global color override, so `--color never` strips prefixes.
#[inline]
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module {
        "error" => prefix
            .if_supports_color(Stdout, |p| p.bright_red().bold().to_string())
            .to_string(),
        "warn" => prefix
            .if_supports_color(Stdout, |p| p.bright_yellow().bold().to_string())
            .to_string(),
        "validate" => prefix
            .if_supports_color(Stdout, |p| p.bright_blue().bold().to_string())
            .to_string(),
        _ => prefix
            .if_supports_color(Stdout, |p| p.bright_green().bold().to_string())
            .to_string(),
    }
}
