//! The workflow-engine seam.
//!
//! Callers of the form engine reach the external workflow engine only
//! through this trait, so request-handling code and tests can swap the HTTP
//! gateway for an in-memory double.

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;

use super::types::{
    CompleteTaskRequest, MessageCorrelationRequest, MessageCorrelationResult, TaskRef,
};
use crate::error::Result;
use crate::models::VariableValue;

#[async_trait]
pub trait WorkflowEngine: Send + Sync {
    /// The current task of a process instance. `Ok(None)` is the ambiguous
    /// "no task ready yet" outcome; only that outcome is retried by
    /// [`super::retry::fetch_next_task_with_retry`]. An `Err` is an explicit
    /// transport failure and is never retried.
    async fn fetch_next_task(&self, process_instance_id: &str) -> Result<Option<TaskRef>>;

    /// The form variables of a task, including the `viewJson` carrier.
    async fn fetch_form_variables(
        &self,
        task_id: &str,
    ) -> Result<IndexMap<String, VariableValue>>;

    /// Completes a task with the given variables; the raw engine response
    /// is returned untouched.
    async fn complete_task(&self, task_id: &str, request: &CompleteTaskRequest) -> Result<Value>;

    /// Correlates a named message, starting or advancing a process.
    async fn correlate_message(
        &self,
        request: &MessageCorrelationRequest,
    ) -> Result<MessageCorrelationResult>;

    /// All open tasks assigned to `assignee`.
    async fn tasks_for_assignee(&self, assignee: &str) -> Result<Vec<TaskRef>>;
}
