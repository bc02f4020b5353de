//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! subject resolution (argument or stdin) and parsing with CLI error
//! mapping.

use crate::error::CliError;
use fieldpath::Path;
use std::io::{self, BufRead};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Resolve a subject string, reading one line from stdin if not specified.
///
/// Commands accept the subject as a positional argument; omitting it reads
/// the subject from standard input instead, so paths can be piped in.
pub fn resolve_subject(subject: Option<String>) -> Result<String, CliError> {
    match subject {
        Some(s) => Ok(s),
        None => {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            // Strip the line terminator, not other whitespace: subjects may
            // legitimately contain spaces inside quoted keys.
            while line.ends_with('\n') || line.ends_with('\r') {
                line.pop();
            }
            Ok(line)
        }
    }
}

/// Parse a subject string, mapping a grammar violation to a CLI error.
pub fn parse_subject(subject: &str) -> Result<Path, CliError> {
    Path::parse(subject).map_err(CliError::from)
}
