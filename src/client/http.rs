//! HTTP gateway to the workflow engine's REST API.
//!
//! Thin transport: every method maps one trait call onto one endpoint and
//! converts transport failures into [`FormFlowError::EngineTransport`]. The
//! engine answers task queries with arrays; a singleton is unwrapped here
//! and an empty array becomes the ambiguous `None` outcome the retry layer
//! understands.

use std::time::Duration;

use async_trait::async_trait;
use indexmap::IndexMap;
use reqwest::Client;
use serde_json::Value;

use super::traits::WorkflowEngine;
use super::types::{
    CompleteTaskRequest, MessageCorrelationRequest, MessageCorrelationResult, TaskRef,
};
use crate::config::EngineConfig;
use crate::error::{FormFlowError, Result};
use crate::models::VariableValue;

pub struct HttpWorkflowEngine {
    client: Client,
    base_url: String,
}

impl HttpWorkflowEngine {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| FormFlowError::Configuration {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl WorkflowEngine for HttpWorkflowEngine {
    async fn fetch_next_task(&self, process_instance_id: &str) -> Result<Option<TaskRef>> {
        let response = self
            .client
            .get(self.url("/task"))
            .query(&[("processInstanceId", process_instance_id)])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FormFlowError::transport("fetch_next_task", e))?;

        let mut tasks: Vec<TaskRef> = response
            .json()
            .await
            .map_err(|e| FormFlowError::transport("fetch_next_task", e))?;

        if tasks.is_empty() {
            Ok(None)
        } else {
            Ok(Some(tasks.remove(0)))
        }
    }

    async fn fetch_form_variables(
        &self,
        task_id: &str,
    ) -> Result<IndexMap<String, VariableValue>> {
        let response = self
            .client
            .get(self.url(&format!("/task/{task_id}/form-variables")))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FormFlowError::transport("fetch_form_variables", e))?;

        response
            .json()
            .await
            .map_err(|e| FormFlowError::transport("fetch_form_variables", e))
    }

    async fn complete_task(&self, task_id: &str, request: &CompleteTaskRequest) -> Result<Value> {
        let response = self
            .client
            .post(self.url(&format!("/task/{task_id}/complete")))
            .json(request)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FormFlowError::transport("complete_task", e))?;

        // Without variables-in-return the engine answers with an empty body.
        let body = response
            .text()
            .await
            .map_err(|e| FormFlowError::transport("complete_task", e))?;
        if body.is_empty() {
            Ok(Value::Null)
        } else {
            serde_json::from_str(&body).map_err(|e| FormFlowError::transport("complete_task", e))
        }
    }

    async fn correlate_message(
        &self,
        request: &MessageCorrelationRequest,
    ) -> Result<MessageCorrelationResult> {
        let response = self
            .client
            .post(self.url("/message"))
            .json(request)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FormFlowError::transport("correlate_message", e))?;

        // Correlation results arrive as a singleton array.
        let mut results: Vec<MessageCorrelationResult> = response
            .json()
            .await
            .map_err(|e| FormFlowError::transport("correlate_message", e))?;

        let first = results.drain(..).next().unwrap_or_default();
        Ok(first)
    }

    async fn tasks_for_assignee(&self, assignee: &str) -> Result<Vec<TaskRef>> {
        let response = self
            .client
            .get(self.url("/task"))
            .query(&[("assignee", assignee)])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FormFlowError::transport("tasks_for_assignee", e))?;

        response
            .json()
            .await
            .map_err(|e| FormFlowError::transport("tasks_for_assignee", e))
    }
}
