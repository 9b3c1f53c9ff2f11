use schemars::schema_for;
use serde_json::Value;

use super::{registry, ToolCategory, ToolEntry};
use crate::error::BridgeError;

pub(super) fn empty_object_schema() -> Value {
    serde_json::json!({ "type": "object", "properties": {} })
}

pub(super) fn schema_value<T: schemars::JsonSchema>() -> Value {
    let root = schema_for!(T);
    serde_json::to_value(root).unwrap_or(empty_object_schema())
}

pub(super) fn de<T: serde::de::DeserializeOwned>(input: &Value) -> Result<T, BridgeError> {
    serde_json::from_value(input.clone()).map_err(|e| BridgeError::validation(e.to_string()))
}

/// Every tool name in catalog order.
pub fn tool_names() -> Vec<&'static str> {
    registry().iter().map(|e| e.info.name).collect()
}

/// Help text for tool discovery.
/// Three tiers: no topic → categories, category → tool list, tool → full schema.
pub fn help_text(topic: Option<&str>) -> String {
    let reg = registry();
    match topic {
        None => {
            let mut lines = vec!["Available tool categories:".to_string()];
            for category in ToolCategory::all() {
                let count = reg.in_category(*category).count();
                if count > 0 {
                    lines.push(format!(
                        "  {} ({count}): {}",
                        category.slug(),
                        category.description()
                    ));
                }
            }
            lines.push(String::new());
            lines.push("Use help({topic: \"filter\"}) to list tools in a category.".to_string());
            lines.push(
                "Use help({topic: \"applyGaussianBlur\"}) for full parameter details.".to_string(),
            );
            lines.join("\n")
        }
        Some(topic) => {
            if let Some(entry) = reg.get(topic) {
                return tool_help(entry);
            }

            let Some(category) = ToolCategory::from_slug(topic) else {
                return format!("Unknown topic: \"{topic}\". Use help() to see categories and tools.");
            };
            let mut lines = vec![format!("{} tools:", category.slug())];
            for entry in reg.in_category(category) {
                lines.push(format!("  - {}: {}", entry.info.name, entry.info.description));
            }
            lines.push(String::new());
            lines.push("Use help({topic: \"toolName\"}) for parameter details.".to_string());
            lines.join("\n")
        }
    }
}

fn tool_help(entry: &ToolEntry) -> String {
    let schema_str =
        serde_json::to_string_pretty(&entry.schema).unwrap_or_else(|_| "{}".to_string());
    format!(
        "{}: {}\nCategory: {}\n\nParameters:\n{}",
        entry.info.name,
        entry.info.description,
        entry.info.category.slug(),
        schema_str,
    )
}

/// JSON Schema formatted tool list (MCP style).
pub fn to_json_schema() -> Value {
    Value::Array(
        registry()
            .iter()
            .map(|e| {
                serde_json::json!({
                    "name": e.info.name,
                    "description": e.info.description,
                    "category": e.info.category,
                    "inputSchema": e.schema,
                })
            })
            .collect(),
    )
}
