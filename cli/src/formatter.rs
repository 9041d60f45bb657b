//! Output formatter for schema-inspection results
//!
//! Renders the endpoint's JSON row objects as an aligned text table.

use colored::*;
use serde_json::Value as JsonValue;

/// Maximum column width before truncation
const MAX_COLUMN_WIDTH: usize = 40;

/// Formats row objects for display
pub struct OutputFormatter {
    color: bool,
}

impl OutputFormatter {
    /// Create a new formatter
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Format rows as an aligned table with a trailing row count.
    ///
    /// Column order follows the first row's key order, which the endpoint
    /// emits in SELECT order.
    pub fn format_rows(&self, rows: &[JsonValue]) -> String {
        let Some(first) = rows.first().and_then(|r| r.as_object()) else {
            return "(0 rows)".to_string();
        };

        let columns: Vec<String> = first.keys().cloned().collect();

        let mut widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
        let mut cells: Vec<Vec<String>> = Vec::with_capacity(rows.len());
        for row in rows {
            let mut line = Vec::with_capacity(columns.len());
            for (i, column) in columns.iter().enumerate() {
                let value = row
                    .as_object()
                    .and_then(|o| o.get(column))
                    .map(format_value)
                    .unwrap_or_default();
                let value = truncate_value(&value, MAX_COLUMN_WIDTH);
                widths[i] = widths[i].max(value.chars().count());
                line.push(value);
            }
            cells.push(line);
        }

        let mut out = String::new();

        let header: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, c)| pad(c, widths[i]))
            .collect();
        let header = header.join(" | ");
        if self.color {
            out.push_str(&header.bold().to_string());
        } else {
            out.push_str(&header);
        }
        out.push('\n');

        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&separator.join("-+-"));
        out.push('\n');

        for line in &cells {
            let rendered: Vec<String> = line
                .iter()
                .enumerate()
                .map(|(i, v)| pad(v, widths[i]))
                .collect();
            out.push_str(rendered.join(" | ").trim_end());
            out.push('\n');
        }

        out.push_str(&format!(
            "({} row{})",
            rows.len(),
            if rows.len() == 1 { "" } else { "s" }
        ));
        out
    }
}

/// Render a JSON value the way psql would, not the way serde_json would
fn format_value(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "NULL".to_string(),
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Truncate a string to max width with ellipsis
fn truncate_value(value: &str, max_width: usize) -> String {
    if value.chars().count() <= max_width {
        value.to_string()
    } else {
        let take = max_width.saturating_sub(3);
        format!("{}...", value.chars().take(take).collect::<String>())
    }
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{}{}", value, " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_empty() {
        let formatter = OutputFormatter::new(false);
        assert_eq!(formatter.format_rows(&[]), "(0 rows)");
    }

    #[test]
    fn test_format_table_alignment() {
        let formatter = OutputFormatter::new(false);
        let rows = vec![
            json!({"table_name": "pharmacies", "column_count": 7}),
            json!({"table_name": "orders", "column_count": 12}),
        ];
        let output = formatter.format_rows(&rows);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "table_name | column_count");
        assert!(lines[1].starts_with("-----------+"));
        assert!(lines[2].starts_with("pharmacies | 7"));
        assert!(lines[3].starts_with("orders"));
        assert_eq!(lines[4], "(2 rows)");
    }

    #[test]
    fn test_format_value_rendering() {
        assert_eq!(format_value(&JsonValue::Null), "NULL");
        assert_eq!(format_value(&json!("text")), "text");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!(true)), "true");
    }

    #[test]
    fn test_truncation() {
        let long = "x".repeat(50);
        let truncated = truncate_value(&long, 40);
        assert_eq!(truncated.chars().count(), 40);
        assert!(truncated.ends_with("..."));
    }
}
