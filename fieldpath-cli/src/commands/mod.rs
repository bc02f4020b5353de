//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `parse`: Parse a subject string and print its segments
//! - `render`: Print the dotted rendering of a parsed path
//! - `validate`: Check that a subject string is well-formed
//! - `assert_prefix`: Assert that a dotted candidate prefixes a path
//! - `completions`: Generate shell completion scripts

pub mod assert_prefix;
pub mod completions;
pub mod parse;
pub mod render;
pub mod validate;

pub use assert_prefix::AssertPrefixCommand;
pub use completions::CompletionsCommand;
pub use parse::ParseCommand;
pub use render::RenderCommand;
pub use validate::ValidateCommand;
