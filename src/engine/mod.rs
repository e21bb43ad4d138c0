//! # Form Component Tree Engine
//!
//! The pure transformation core: rebuilds a nested forest from the flat
//! parent-pointer list, rekeys property bags to type-qualified keys for
//! display, and derives the path-addressed submission map for the workflow
//! engine.
//!
//! Every stage is synchronous, deterministic, and free of shared state;
//! concurrent invocations over different documents need no coordination.

pub mod extractor;
pub mod pipeline;
pub mod rekeyer;
pub mod tree_builder;

pub use extractor::{extract_required_fields, extract_required_fields_into, SubmissionValueMap};
pub use pipeline::{prepare_display, prepare_submission};
pub use rekeyer::rekey_by_type;
pub use tree_builder::build_tree;
