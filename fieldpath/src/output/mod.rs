//! Output formatting module for parsed paths.
//!
//! This module provides various output formats for displaying a parsed
//! path's segment sequence: a human-readable listing, JSON, and YAML.

mod formatters;

use crate::{Path, Result};

pub use formatters::{HumanFormatter, JsonFormatter, YamlFormatter};

/// Trait for formatting a parsed path into different output formats.
pub trait OutputFormatter {
    /// Format the given path's segment sequence into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, path: &Path) -> Result<String>;
}

/// Available output formats for parsed paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable listing, one segment per line.
    Human,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl OutputFormat {
    /// Parses an output format name.
    ///
    /// Recognizes: "human", "json", "yaml" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldpath::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
    /// assert_eq!(OutputFormat::parse("YAML").unwrap(), OutputFormat::Yaml);
    /// assert!(OutputFormat::parse("xml").is_err());
    /// ```
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(format!("invalid output format: {s}")),
        }
    }

    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}
