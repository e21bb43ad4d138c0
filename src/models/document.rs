//! Form document envelope.
//!
//! The workflow engine carries a form as a JSON string inside the `viewJson`
//! form variable. Parsed, it is this envelope: a little process/form
//! metadata plus the component list, flat on arrival and nested after the
//! tree builder has run.

use serde::{Deserialize, Serialize};

use super::component::Component;
use crate::error::{FormFlowError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_label: Option<String>,
    #[serde(default)]
    pub components_list: Vec<Component>,
}

impl FormDocument {
    pub fn new(components_list: Vec<Component>) -> Self {
        Self {
            components_list,
            ..Self::default()
        }
    }

    /// Parses the `viewJson` carrier. A document that does not parse is a
    /// structural failure, not a transient one.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(FormFlowError::malformed)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(FormFlowError::malformed)
    }
}
