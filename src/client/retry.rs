//! Bounded retry around fetch-next-task.
//!
//! After a task completes, the engine may not have materialized the next
//! task yet; the fetch then returns neither a result nor an error. That
//! ambiguous outcome is retried a fixed number of times with a fixed delay.
//! An explicit transport error fails immediately, and exhausting every
//! attempt without a task is fatal for the call.
//!
//! The delay is a plain `tokio::time::sleep`, so dropping the future when
//! the surrounding request is cancelled aborts any pending wait promptly.
//! Nothing is cached between attempts.

use std::time::Duration;

use crate::client::traits::WorkflowEngine;
use crate::client::types::TaskRef;
use crate::error::{FormFlowError, Result};

/// Fixed-attempt, fixed-delay policy. Defaults to the engine contract of at
/// most 3 attempts with a 500ms pause between ambiguous outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_millis(500),
        }
    }
}

/// Fetches the next task, retrying only the "no task yet" outcome.
pub async fn fetch_next_task_with_retry(
    engine: &dyn WorkflowEngine,
    process_instance_id: &str,
    policy: &RetryPolicy,
) -> Result<TaskRef> {
    for attempt in 1..=policy.max_attempts {
        // An Err here propagates immediately: transport failures are not
        // retried at this layer.
        match engine.fetch_next_task(process_instance_id).await? {
            Some(task) => return Ok(task),
            None => {
                if attempt < policy.max_attempts {
                    tracing::warn!(
                        attempt,
                        process_instance_id = %process_instance_id,
                        delay_ms = policy.delay.as_millis() as u64,
                        "no task available yet; retrying after fixed delay"
                    );
                    tokio::time::sleep(policy.delay).await;
                }
            }
        }
    }

    Err(FormFlowError::FetchExhausted {
        attempts: policy.max_attempts,
    })
}
