//! # Round-trip Orchestrator
//!
//! Composes the engine stages for the two call sites. No transformation of
//! its own: each stage's output passes to the next unmodified.

use crate::engine::extractor::{extract_required_fields, SubmissionValueMap};
use crate::engine::rekeyer::rekey_by_type;
use crate::engine::tree_builder::build_tree;
use crate::error::Result;
use crate::models::FormDocument;

/// Prepares a flat document for display: build the tree, then rekey every
/// bag to its type-qualified key.
pub fn prepare_display(mut document: FormDocument) -> Result<FormDocument> {
    document.components_list = build_tree(document.components_list)?;
    rekey_by_type(&mut document.components_list);
    Ok(document)
}

/// Prepares a submitted document for the workflow engine: build the tree
/// and hand the raw nested forest to the extractor.
pub fn prepare_submission(document: FormDocument) -> Result<SubmissionValueMap> {
    let forest = build_tree(document.components_list)?;
    Ok(extract_required_fields(&forest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormDocument;
    use serde_json::json;

    /// The two-component round trip: group "a" parenting input "b", rekeyed
    /// for display, then extracted for submission.
    #[test]
    fn test_display_and_submission_round_trip() {
        let raw = json!({
            "componentsList": [
                { "id": "a", "type": "group", "parentId": null, "properties": {} },
                { "id": "b", "type": "input", "parentId": "a", "properties": {
                    "submitRequiredFields": [
                        { "fieldName": "name", "value": "Alice", "isRequired": true }
                    ]
                }}
            ]
        });
        let document: FormDocument = serde_json::from_value(raw).unwrap();

        let display = prepare_display(document.clone()).unwrap();
        let display_value = serde_json::to_value(&display).unwrap();
        assert_eq!(display_value["componentsList"][0]["id"], json!("a"));
        let nested_b = &display_value["componentsList"][0]["items"][0];
        assert_eq!(nested_b["id"], json!("b"));
        assert!(nested_b.get("inputProperties").is_some());

        let submission = prepare_submission(document).unwrap();
        assert_eq!(submission.len(), 1);
        assert_eq!(
            submission["componentsList[0].items[0].properties.submitRequiredFields[0]"],
            json!("Alice")
        );
    }

    #[test]
    fn test_structural_failure_propagates_from_either_path() {
        let raw = json!({
            "componentsList": [
                { "id": "b", "type": "input", "parentId": "nowhere" }
            ]
        });
        let document: FormDocument = serde_json::from_value(raw).unwrap();

        assert!(prepare_display(document.clone()).is_err());
        assert!(prepare_submission(document).is_err());
    }
}
