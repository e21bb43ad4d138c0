//! # Workflow Engine Client
//!
//! The boundary to the external workflow engine: the [`WorkflowEngine`]
//! seam, its HTTP implementation, the request/response types, and the
//! bounded retry wrapper around fetching the next task. Everything the core
//! engine consumes or produces crosses this boundary as plain data.

pub mod http;
pub mod retry;
pub mod traits;
pub mod types;

pub use http::HttpWorkflowEngine;
pub use retry::{fetch_next_task_with_retry, RetryPolicy};
pub use traits::WorkflowEngine;
pub use types::{
    CompleteTaskRequest, MessageCorrelationRequest, MessageCorrelationResult, TaskCompletion,
    TaskRef,
};
