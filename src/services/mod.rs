//! Request-handling services composed from the engine and the client seam.

pub mod task_service;

pub use task_service::{TaskService, VIEW_JSON_KEY};
