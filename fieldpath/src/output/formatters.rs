//! Output formatter implementations.

use crate::{Path, Result, Segment};

use super::OutputFormatter;

/// Formatter for human-readable output.
///
/// Lists one segment per line with its position, kind, and value.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, path: &Path) -> Result<String> {
        if path.is_empty() {
            return Ok("(empty path)".to_string());
        }

        let mut lines = Vec::with_capacity(path.len());
        for (position, segment) in path.iter().enumerate() {
            let line = match segment {
                Segment::Field(name) => format!("{position}  field    {name}"),
                Segment::Element(index) => format!("{position}  element  {index}"),
                Segment::Key(key) => format!("{position}  key      {key}"),
            };
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, path: &Path) -> Result<String> {
        Ok(serde_json::to_string_pretty(path)?)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, path: &Path) -> Result<String> {
        Ok(serde_yaml::to_string(path)?)
    }
}
