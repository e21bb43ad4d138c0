//! # Task Service
//!
//! The request-handling flow around the pure engine: fetch a task's form
//! and prepare it for display, or submit a completed form and advance to
//! the next task. All network access goes through the [`WorkflowEngine`]
//! seam; the service itself holds no state across calls.

use indexmap::IndexMap;

use crate::client::retry::fetch_next_task_with_retry;
use crate::client::traits::WorkflowEngine;
use crate::client::types::{CompleteTaskRequest, TaskCompletion};
use crate::config::EngineConfig;
use crate::engine::pipeline::{prepare_display, prepare_submission};
use crate::error::{FormFlowError, Result};
use crate::models::{FormDocument, VariableValue};

/// Form variable carrying the serialized form document.
pub const VIEW_JSON_KEY: &str = "viewJson";

pub struct TaskService<E> {
    engine: E,
    config: EngineConfig,
}

impl<E: WorkflowEngine> TaskService<E> {
    pub fn new(engine: E, config: EngineConfig) -> Self {
        Self { engine, config }
    }

    /// Fetches a task's form variables and prepares the carried document
    /// for display: tree reconstruction followed by type-qualified
    /// rekeying.
    pub async fn current_form(&self, task_id: &str) -> Result<FormDocument> {
        let variables = self.engine.fetch_form_variables(task_id).await?;
        let raw = variables
            .get(VIEW_JSON_KEY)
            .and_then(VariableValue::as_str)
            .ok_or_else(|| FormFlowError::MalformedDocument {
                message: format!("task {task_id} carries no {VIEW_JSON_KEY} form variable"),
            })?;

        let document = FormDocument::from_json(raw)?;
        prepare_display(document)
    }

    /// Completes `task_id` with the required fields extracted from the
    /// submitted document, then fetches and prepares the next task's form.
    ///
    /// `metadata` is the caller's constant variables (client and network
    /// identifiers); the core never synthesizes them, it only merges them
    /// after the extracted fields.
    pub async fn complete_task(
        &self,
        task_id: &str,
        process_instance_id: &str,
        submitted: FormDocument,
        metadata: IndexMap<String, VariableValue>,
    ) -> Result<TaskCompletion> {
        let submission = prepare_submission(submitted)?;
        tracing::debug!(
            task_id = %task_id,
            field_count = submission.len(),
            "extracted required fields for submission"
        );

        let mut variables: IndexMap<String, VariableValue> = submission
            .into_iter()
            .map(|(path, value)| (path, VariableValue::of(value)))
            .collect();
        variables.extend(metadata);

        let request = CompleteTaskRequest {
            with_variables_in_return: true,
            variables,
        };
        self.engine.complete_task(task_id, &request).await?;

        let next = fetch_next_task_with_retry(
            &self.engine,
            process_instance_id,
            &self.config.retry_policy(),
        )
        .await?;

        let next_form = self.current_form(&next.id).await?;
        Ok(TaskCompletion {
            next_task_id: next.id,
            next_task_name: next.name,
            view_json: next_form.to_json()?,
        })
    }
}
