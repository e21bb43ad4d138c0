//! # Structured Error Handling
//!
//! Error taxonomy for the form engine and its workflow-engine boundary,
//! using `thiserror` for structured error types instead of `Box<dyn Error>`
//! patterns.
//!
//! Structural errors (`DuplicateId`, `DanglingParentReference`,
//! `CyclicParentage`, `MalformedDocument`) are deterministic input-validation
//! failures: they abort a transformation immediately and are never retried.
//! Only the caller-side fetch of the next task retries, and only on the
//! ambiguous "no result, no error" outcome (see [`crate::client::retry`]).

use thiserror::Error;

/// All failures surfaced by this crate.
#[derive(Error, Debug)]
pub enum FormFlowError {
    /// Two components in one flat document share an `id`.
    #[error("duplicate component id: {id}")]
    DuplicateId { id: String },

    /// A component references a parent `id` that exists nowhere in the
    /// document.
    #[error("component {id} references unknown parent {parent_id}")]
    DanglingParentReference { id: String, parent_id: String },

    /// A `parentId` chain loops back on itself, so the document is not a
    /// forest.
    #[error("cyclic parentage detected at component {id}")]
    CyclicParentage { id: String },

    /// The document is structurally invalid (unparseable envelope, bag of
    /// the wrong shape, missing carrier field).
    #[error("malformed form document: {message}")]
    MalformedDocument { message: String },

    /// Invalid engine configuration, typically a bad environment override.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// An explicit transport failure talking to the workflow engine. Fails
    /// the operation immediately; never absorbed by the retry wrapper.
    #[error("workflow engine request failed: {operation}: {message}")]
    EngineTransport { operation: String, message: String },

    /// Every fetch attempt came back without a task and without an error.
    #[error("no task became available after {attempts} attempts")]
    FetchExhausted { attempts: u32 },
}

impl FormFlowError {
    pub(crate) fn malformed(err: impl std::fmt::Display) -> Self {
        FormFlowError::MalformedDocument {
            message: err.to_string(),
        }
    }

    pub(crate) fn transport(operation: &str, err: impl std::fmt::Display) -> Self {
        FormFlowError::EngineTransport {
            operation: operation.to_string(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FormFlowError>;
