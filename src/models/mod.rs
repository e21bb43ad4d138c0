//! # Form Component Data Model
//!
//! Shared data model for dynamic, self-describing forms: the component and
//! its property bag, the document envelope that carries a component list,
//! and the workflow engine's variable-value envelope.
//!
//! The same [`Component`] struct backs both representations the engine
//! transforms between: the flat parent-pointer list emitted by the form
//! designer and the nested tree consumed by the client UI.

pub mod component;
pub mod document;
pub mod property_bag;
pub mod variable;

pub use component::{BagKey, Component};
pub use document::FormDocument;
pub use property_bag::{
    BagEntry, ButtonOption, PropertyBag, RequiredFieldDescriptor, BUTTONS_KEY,
    SUBMIT_REQUIRED_FIELDS_KEY,
};
pub use variable::VariableValue;
