//! Formatter implementations for parsed paths.

use crate::error::Error;
use crate::path::{Parsed, PathParts};
use crate::Result;

use super::OutputFormatter;

/// Key order used by [`PlainFormatter`].
const PART_ORDER: [&str; 4] = ["dir", "base", "filename", "extension"];

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, parsed: &Parsed) -> Result<String> {
        serde_json::to_string_pretty(parsed).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, parsed: &Parsed) -> Result<String> {
        Ok(serde_yaml::to_string(parsed)?)
    }
}

/// Formatter for `key=value` lines.
///
/// Keys appear in the order dir, base, filename, extension; an empty
/// extension is omitted.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format(&self, parsed: &Parsed) -> Result<String> {
        let lines: Vec<String> = PART_ORDER
            .iter()
            .filter_map(|key| {
                parsed
                    .part(key)
                    .filter(|value| *key != "extension" || !value.is_empty())
                    .map(|value| format!("{key}={value}"))
            })
            .collect();
        Ok(lines.join("\n"))
    }
}
