//! # Required-Field Extractor
//!
//! Walks a nested forest in document order and derives the path-addressed
//! submission map the workflow engine consumes as task variables.
//!
//! Two independent mechanisms contribute per component:
//! - its own `submitRequiredFields` descriptors with `isRequired == true`,
//!   keyed by the descriptor's structural path;
//! - its selected button branch, whose items are walked recursively while
//!   every unselected sibling branch is excluded entirely. Unselected UI
//!   branches do not apply to the current submission, so their required
//!   fields are never emitted.
//!
//! Paths are stable locators over the nested document:
//! `componentsList[i]`, `.items[j]` per child edge,
//! `.properties.buttons[k].items[m]` per selected-branch edge, terminated by
//! `.properties.submitRequiredFields[n]`. A duplicate path resolves
//! last-write-wins in traversal order.

use indexmap::IndexMap;
use serde_json::Value;

use crate::models::{ButtonOption, Component};

/// Path-addressed submission values, in traversal order.
pub type SubmissionValueMap = IndexMap<String, Value>;

/// Extracts every required field reachable in the forest.
pub fn extract_required_fields(forest: &[Component]) -> SubmissionValueMap {
    let mut out = SubmissionValueMap::new();
    extract_required_fields_into(forest, &mut out);
    out
}

/// Extraction into an existing map. A path already present is overwritten:
/// the later write in traversal order wins.
pub fn extract_required_fields_into(forest: &[Component], out: &mut SubmissionValueMap) {
    for (index, component) in forest.iter().enumerate() {
        visit(component, &format!("componentsList[{index}]"), out);
    }
}

/// Outcome of resolving a component's button selector. "No selection",
/// "selection without match", and "matched branch" are distinct states; the
/// first two take no branch and are not errors.
enum ButtonSelection<'a> {
    NoSelector,
    Unmatched(&'a str),
    Matched { index: usize, option: &'a ButtonOption },
}

fn resolve_selection<'a>(
    component: &'a Component,
    options: &'a [ButtonOption],
) -> ButtonSelection<'a> {
    let selector = component
        .properties
        .as_ref()
        .and_then(|bag| bag.required_fields())
        .and_then(|fields| fields.last())
        .and_then(|field| field.value.as_str());

    let Some(selector) = selector else {
        return ButtonSelection::NoSelector;
    };

    match options
        .iter()
        .enumerate()
        .find(|(_, option)| option.id == selector)
    {
        Some((index, option)) => ButtonSelection::Matched { index, option },
        None => ButtonSelection::Unmatched(selector),
    }
}

fn visit(component: &Component, path: &str, out: &mut SubmissionValueMap) {
    if let Some(fields) = component
        .properties
        .as_ref()
        .and_then(|bag| bag.required_fields())
    {
        for (index, field) in fields.iter().enumerate() {
            if field.is_required {
                out.insert(
                    format!("{path}.properties.submitRequiredFields[{index}]"),
                    field.value.clone(),
                );
            }
        }
    }

    if let Some(options) = component.properties.as_ref().and_then(|bag| bag.buttons()) {
        match resolve_selection(component, options) {
            ButtonSelection::Matched { index, option } => {
                for (item_index, item) in option.items.iter().enumerate() {
                    visit(
                        item,
                        &format!("{path}.properties.buttons[{index}].items[{item_index}]"),
                        out,
                    );
                }
            }
            ButtonSelection::Unmatched(selector) => {
                tracing::debug!(
                    component_id = %component.id,
                    selector = %selector,
                    "button selector matched no option; branch skipped"
                );
            }
            ButtonSelection::NoSelector => {}
        }
    }

    for (index, child) in component.children.iter().enumerate() {
        visit(child, &format!("{path}.items[{index}]"), out);
    }
}
