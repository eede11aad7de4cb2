//
//  powertoys-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Formatting
//!
//! Renders [`ApiResult`]s for the `powertoys` binary.
//!
//! | Format | Lists | Objects | Scalars | No result |
//! |--------|-------|---------|---------|-----------|
//! | `Table` | table | `key: value` lines | raw value | `No result` |
//! | `Json` | JSON | JSON | JSON | `null` |
//!
//! Status and diagnostic messages go to stderr so stdout stays parseable.

mod json;
mod table;

pub use json::*;
pub use table::*;

use console::style;
use serde_json::Value;

use crate::api::ApiResult;

/// The available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output for interactive terminals
    #[default]
    Table,
    /// Pretty-printed JSON for scripting
    Json,
}

/// Writes results and status messages in the chosen format.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    /// Creates a writer with color support auto-detected from the terminal.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }

    pub fn table() -> Self {
        Self::new(OutputFormat::Table)
    }

    /// Overrides color detection.
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Writes an API result to stdout.
    pub fn write_result(&self, result: &ApiResult) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => {
                let value = result.value().unwrap_or(&Value::Null);
                write_json(value)?;
            }
            OutputFormat::Table => println!("{}", self.render(result)),
        }
        Ok(())
    }

    /// Renders an API result in table format.
    pub fn render(&self, result: &ApiResult) -> String {
        let value = match result {
            ApiResult::NoResult => {
                return if self.color {
                    style("No result").dim().to_string()
                } else {
                    "No result".to_string()
                };
            }
            ApiResult::Value(value) => value,
        };

        if let Some(rows) = tabular_rows(value) {
            return objects_table(&rows, self.color).to_string();
        }

        match value {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| self.field_line(key, &self.field_text(key, value)))
                .collect::<Vec<_>>()
                .join("\n"),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    // Detail lines show values in full; only table cells are truncated.
    fn field_text(&self, key: &str, value: &Value) -> String {
        match value {
            Value::Bool(b) => format_bool(*b, self.color),
            Value::String(status) if key == "status" => format_status(status, self.color),
            other => value_text(other),
        }
    }

    fn field_line(&self, key: &str, value: &str) -> String {
        if self.color {
            format!("{}: {}", style(key).dim(), value)
        } else {
            format!("{}: {}", key, value)
        }
    }

    pub fn write_success(&self, msg: &str) {
        if self.color {
            eprintln!("{} {}", style("✓").green().bold(), msg);
        } else {
            eprintln!("✓ {}", msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn writer() -> OutputWriter {
        OutputWriter::table().with_color(false)
    }

    #[test]
    fn test_render_no_result() {
        assert_eq!(writer().render(&ApiResult::NoResult), "No result");
    }

    #[test]
    fn test_render_object_as_fields() {
        let result = ApiResult::Value(json!({"id": "abc", "active": true}));
        assert_eq!(writer().render(&result), "active: Yes\nid: abc");
    }

    #[test]
    fn test_render_object_keeps_long_values() {
        let key = "K".repeat(60);
        let result = ApiResult::Value(json!({"licence_key": key}));
        assert_eq!(writer().render(&result), format!("licence_key: {}", key));
    }

    #[test]
    fn test_render_scalars() {
        assert_eq!(writer().render(&ApiResult::Value(json!(false))), "false");
        assert_eq!(writer().render(&ApiResult::Value(json!("ok"))), "ok");
    }

    #[test]
    fn test_render_list_as_table() {
        let result = ApiResult::Value(json!([{"id": "L1"}, {"id": "L2"}]));
        let rendered = writer().render(&result);
        assert!(rendered.contains("L1"));
        assert!(rendered.contains("L2"));
        assert!(rendered.lines().count() > 2);
    }
}
