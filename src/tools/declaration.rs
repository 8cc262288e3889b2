//! Tool declaration helpers using JSON Schema generation

use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

/// Declaration of a tool offered by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDeclaration {
    /// Tool name, used for dispatch
    pub name: String,
    /// What the tool does
    pub description: String,
    /// JSON Schema for the tool's parameters
    pub input_schema: serde_json::Value,
}

/// Create a tool declaration from a type that implements JsonSchema
///
/// Doc comments on the type's fields become property descriptions in the
/// generated schema.
pub fn create_tool_declaration<T: JsonSchema>(
    name: impl Into<String>,
    description: impl Into<String>,
) -> ToolDeclaration {
    let schema = schema_for!(T);
    ToolDeclaration {
        name: name.into(),
        description: description.into(),
        input_schema: serde_json::to_value(&schema)
            .expect("Failed to serialize schema - this is a bug in schemars or the JsonSchema impl"),
    }
}
