//
//  powertoys-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Renders lists of licences or customers as terminal tables using
//! `comfy_table`. Because the API returns untyped JSON, columns are derived
//! from the objects themselves: the union of their keys, in order of first
//! appearance.
//!
//! ## Example
//!
//! ```rust
//! use powertoys_client::output::TableBuilder;
//!
//! let table = TableBuilder::new()
//!     .color(false)
//!     .headers(["ID", "Type", "Status"])
//!     .row(["1", "yearly", "active"])
//!     .row(["2", "monthly", "expired"])
//!     .build();
//! assert!(table.to_string().contains("monthly"));
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde_json::{Map, Value};

/// Longest cell text shown before truncation.
const MAX_CELL_LEN: usize = 48;

/// Creates a new styled table with default settings.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// A builder for constructing formatted tables with a fluent API.
///
/// Headers are shown in cyan when color is enabled.
pub struct TableBuilder {
    table: Table,
    headers: Vec<String>,
    color: bool,
}

impl TableBuilder {
    /// Creates a builder with color support auto-detected from the terminal.
    pub fn new() -> Self {
        Self {
            table: create_table(),
            headers: Vec::new(),
            color: console::colors_enabled(),
        }
    }

    /// Overrides color detection.
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let header_cells: Vec<Cell> = self
                .headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect();
            self.table.set_header(header_cells);
        } else {
            self.table.set_header(&self.headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the rows of a list response, if it has a tabular shape.
///
/// Accepts a non-empty array of objects, or an object wrapping one under
/// `data` (the service's paginated shape).
pub fn tabular_rows(value: &Value) -> Option<Vec<&Map<String, Value>>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => map.get("data")?.as_array()?,
        _ => return None,
    };

    if items.is_empty() {
        return None;
    }

    items.iter().map(Value::as_object).collect()
}

/// Builds a table from a list of JSON objects.
pub fn objects_table(rows: &[&Map<String, Value>], color: bool) -> Table {
    let mut columns: Vec<&str> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !columns.contains(&key.as_str()) {
                columns.push(key);
            }
        }
    }

    let mut builder = TableBuilder::new().color(color).headers(columns.iter().copied());
    for row in rows {
        builder = builder.row(columns.iter().map(|column| {
            let text = cell_text(row.get(*column).unwrap_or(&Value::Null), color);
            if *column == "status" {
                format_status(&text, color)
            } else {
                text
            }
        }));
    }
    builder.build()
}

/// Renders a JSON value as a single table cell, truncated to fit.
pub fn cell_text(value: &Value, color: bool) -> String {
    match value {
        Value::Bool(b) => format_bool(*b, color),
        other => truncate(&value_text(other), MAX_CELL_LEN),
    }
}

/// Renders a JSON value as plain text, in full.
///
/// Strings lose their quotes, `null` is empty, everything else is JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Colors a licence status.
pub fn format_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_string();
    }

    use console::style;
    match status.to_lowercase().as_str() {
        "active" | "activated" | "valid" => style(status).green().to_string(),
        "expired" | "revoked" | "suspended" | "invalid" => style(status).red().to_string(),
        "pending" | "inactive" | "deactivated" => style(status).yellow().to_string(),
        _ => status.to_string(),
    }
}

pub fn format_bool(value: bool, color: bool) -> String {
    if color {
        use console::style;
        if value {
            style("Yes").green().to_string()
        } else {
            style("No").dim().to_string()
        }
    } else if value {
        "Yes".to_string()
    } else {
        "No".to_string()
    }
}

/// Truncates to `max_len` characters, ending in `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}
