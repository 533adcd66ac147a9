use serde::Serialize;
use serde_json::Value;

use crate::error::PropertiesError;

/// Render a decoded property value for a table cell.
///
/// Strings are quoted so an empty or padded value stays visible, and lists
/// keep their brackets so a one-element tag list is not mistaken for a
/// plain string.
pub fn display_property(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{:?}", s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(display_property).collect();
            format!("[{}]", items.join(", "))
        }
        other => other.to_string(),
    }
}

/// Pretty-print `value` as JSON for command output.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, PropertiesError> {
    Ok(serde_json::to_string_pretty(value)?)
}
