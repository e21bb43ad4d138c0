//! The workflow engine's variable-value envelope: a value plus its declared
//! type tag, as exchanged in form-variable maps and task completion
//! requests.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableValue {
    #[serde(default)]
    pub value: Value,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
}

impl VariableValue {
    /// Wraps a value, inferring the declared type tag from its JSON shape.
    pub fn of(value: Value) -> Self {
        let value_type = declared_type(&value).map(str::to_string);
        Self { value, value_type }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::of(Value::String(value.into()))
    }

    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }
}

fn declared_type(value: &Value) -> Option<&'static str> {
    match value {
        Value::Null => None,
        Value::Bool(_) => Some("Boolean"),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some("Integer"),
        Value::Number(_) => Some("Double"),
        Value::String(_) => Some("String"),
        Value::Array(_) | Value::Object(_) => Some("Json"),
    }
}
