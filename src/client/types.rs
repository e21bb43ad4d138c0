//! Request and response types for the workflow-engine boundary.
//!
//! Task and process identifiers are opaque strings: the core passes them
//! through unchanged and never inspects them.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::VariableValue;

/// A task handle returned by the workflow engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_instance_id: Option<String>,
    /// Creation timestamp, informational only. Engines emit both RFC 3339
    /// offsets and the colon-less `+0000` style; anything unreadable is
    /// carried as `None` rather than failing the whole task fetch.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_timestamp"
    )]
    pub created: Option<DateTime<Utc>>,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_engine_timestamp))
}

fn parse_engine_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .ok()
}

impl TaskRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            process_instance_id: None,
            created: None,
        }
    }
}

/// Body of a task completion request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTaskRequest {
    pub with_variables_in_return: bool,
    #[serde(default)]
    pub variables: IndexMap<String, VariableValue>,
}

/// Starts or advances a process by correlating a named message, optionally
/// returning the resulting process variables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCorrelationRequest {
    pub message_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_key: Option<String>,
    pub result_enabled: bool,
    pub variables_in_result_enabled: bool,
    #[serde(default)]
    pub process_variables: IndexMap<String, VariableValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCorrelationResult {
    #[serde(default)]
    pub variables: IndexMap<String, VariableValue>,
}

/// Outcome of completing a task: the next task's identity plus its prepared
/// display document, serialized for the client UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCompletion {
    pub next_task_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_task_name: Option<String>,
    pub view_json: String,
}
