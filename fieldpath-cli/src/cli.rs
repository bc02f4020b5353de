//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AssertPrefixCommand, CompletionsCommand, ParseCommand, RenderCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for parsing and inspecting dotted value paths.
#[derive(Parser)]
#[command(name = "fieldpath")]
#[command(version, about = "Parse and inspect dotted value paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Parse a subject string and print its segments
    Parse(ParseCommand),

    /// Print the dotted rendering of a parsed path
    Render(RenderCommand),

    /// Check that a subject string is well-formed
    Validate(ValidateCommand),

    /// Assert that a dotted candidate prefixes a path
    AssertPrefix(AssertPrefixCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
