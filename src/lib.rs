//! # FormFlow Core
//!
//! Rust core for a workflow-engine form gateway. A form designer emits a
//! flat, parent-pointer addressed list of self-describing components; the
//! client UI renders a nested tree with type-qualified property keys; the
//! workflow engine consumes a path-addressed map of submitted values as
//! task variables. This crate is the transformation engine between those
//! three shapes, plus the narrow boundary around the engine's REST API.
//!
//! ## Module Organization
//!
//! - [`models`] - Component, property bag, document envelope, variable envelope
//! - [`engine`] - Tree builder, property rekeyer, required-field extractor, pipeline
//! - [`client`] - Workflow-engine seam, HTTP gateway, fetch retry contract
//! - [`services`] - Request-level flows (current form, complete task)
//! - [`config`] - Engine configuration with environment overrides
//! - [`error`] - Structured error taxonomy
//! - [`logging`] - Structured logging initialization
//!
//! ## Quick Start
//!
//! ```rust
//! use formflow_core::engine::{prepare_display, prepare_submission};
//! use formflow_core::models::FormDocument;
//!
//! # fn example() -> formflow_core::Result<()> {
//! let document = FormDocument::from_json(
//!     r#"{ "componentsList": [
//!         { "id": "a", "type": "group", "parentId": null },
//!         { "id": "b", "type": "input", "parentId": "a" }
//!     ]}"#,
//! )?;
//!
//! let display = prepare_display(document.clone())?;
//! assert_eq!(display.components_list[0].children[0].id, "b");
//!
//! let submission = prepare_submission(document)?;
//! assert!(submission.is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! The engine stages are pure and synchronous; only the [`client`] and
//! [`services`] layers touch the network.

pub mod client;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use client::{
    fetch_next_task_with_retry, CompleteTaskRequest, HttpWorkflowEngine, RetryPolicy,
    TaskCompletion, TaskRef, WorkflowEngine,
};
pub use config::EngineConfig;
pub use engine::{
    build_tree, extract_required_fields, prepare_display, prepare_submission, rekey_by_type,
    SubmissionValueMap,
};
pub use error::{FormFlowError, Result};
pub use models::{
    BagEntry, BagKey, ButtonOption, Component, FormDocument, PropertyBag,
    RequiredFieldDescriptor, VariableValue,
};
pub use services::TaskService;
