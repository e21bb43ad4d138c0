//! # Tree Builder
//!
//! Reconstructs a component forest from the flat, parent-pointer addressed
//! list the form designer emits. The flat sequence gives no ordering
//! guarantee between parents and children, so references are resolved
//! against the full id set, not just ids seen so far.
//!
//! The reconstruction is an arena-and-index pass: one map from id to arena
//! slot, child lists collected by slot, then a single adoption walk that
//! moves each record out of the arena exactly once. Sibling order under any
//! parent, and root order, equal encounter order in the flat input.

use std::collections::HashMap;

use crate::error::{FormFlowError, Result};
use crate::models::Component;

/// Builds a nested forest from a flat component list.
///
/// Fails with [`FormFlowError::DuplicateId`] when two records share an id,
/// [`FormFlowError::DanglingParentReference`] when a `parentId` resolves to
/// nothing in the document, and [`FormFlowError::CyclicParentage`] when a
/// parent chain loops. A record arriving with nested `items` is not flat at
/// all (a caller echoing the display shape back); silently dropping those
/// subtrees would lose fields, so it fails with
/// [`FormFlowError::MalformedDocument`] instead.
pub fn build_tree(flat: Vec<Component>) -> Result<Vec<Component>> {
    let mut slot_by_id: HashMap<String, usize> = HashMap::with_capacity(flat.len());
    for (slot, component) in flat.iter().enumerate() {
        if !component.children.is_empty() {
            return Err(FormFlowError::MalformedDocument {
                message: format!(
                    "component {} carries nested items; the flat representation addresses structure through parentId only",
                    component.id
                ),
            });
        }
        if slot_by_id.insert(component.id.clone(), slot).is_some() {
            return Err(FormFlowError::DuplicateId {
                id: component.id.clone(),
            });
        }
    }

    let mut parent_slots: Vec<Option<usize>> = Vec::with_capacity(flat.len());
    for component in &flat {
        let parent_slot = match &component.parent_id {
            None => None,
            Some(parent_id) => match slot_by_id.get(parent_id) {
                Some(&slot) => Some(slot),
                None => {
                    return Err(FormFlowError::DanglingParentReference {
                        id: component.id.clone(),
                        parent_id: parent_id.clone(),
                    })
                }
            },
        };
        parent_slots.push(parent_slot);
    }

    reject_parent_cycles(&flat, &parent_slots)?;

    let mut roots: Vec<usize> = Vec::new();
    let mut child_slots: Vec<Vec<usize>> = vec![Vec::new(); flat.len()];
    for (slot, parent) in parent_slots.iter().enumerate() {
        match parent {
            None => roots.push(slot),
            Some(parent_slot) => child_slots[*parent_slot].push(slot),
        }
    }

    let mut arena: Vec<Option<Component>> = flat.into_iter().map(Some).collect();

    Ok(roots
        .into_iter()
        .map(|slot| adopt(slot, &child_slots, &mut arena))
        .collect())
}

/// Moves the record at `slot` out of the arena and attaches its children in
/// encounter order.
fn adopt(slot: usize, child_slots: &[Vec<usize>], arena: &mut [Option<Component>]) -> Component {
    let mut component = arena[slot]
        .take()
        .expect("each arena slot has exactly one parent and is adopted once");
    component.children = child_slots[slot]
        .iter()
        .map(|&child| adopt(child, child_slots, arena))
        .collect();
    component
}

/// Walks every parent chain once, coloring slots, and rejects any chain
/// that re-enters itself. A component that is its own parent is the
/// degenerate case of the same loop.
fn reject_parent_cycles(flat: &[Component], parent_slots: &[Option<usize>]) -> Result<()> {
    // 0 = unvisited, 1 = on the chain being walked, 2 = known acyclic
    let mut color = vec![0u8; flat.len()];
    for start in 0..flat.len() {
        if color[start] != 0 {
            continue;
        }
        let mut chain = Vec::new();
        let mut current = start;
        loop {
            match color[current] {
                1 => {
                    return Err(FormFlowError::CyclicParentage {
                        id: flat[current].id.clone(),
                    })
                }
                2 => break,
                _ => {
                    color[current] = 1;
                    chain.push(current);
                    match parent_slots[current] {
                        Some(parent) => current = parent,
                        None => break,
                    }
                }
            }
        }
        for slot in chain {
            color[slot] = 2;
        }
    }
    Ok(())
}
