//! # Property Rekeyer
//!
//! Switches every reachable component's property bag from the flat
//! protocol's generic `"properties"` storage key to the type-qualified
//! `"{type}Properties"` key the client UI resolves without a schema. The
//! rename is purely structural; bag contents are never touched.
//!
//! Button branch items did not arrive through the forest's own child edge,
//! so the walk takes `ButtonOption.items` as an extra traversal edge once
//! the structure has been reconstructed.

use crate::models::{BagEntry, BagKey, Component};

/// Rekeys every component in the forest in place. Components without a bag,
/// or with an empty one, pass through unchanged. Idempotent: rekeying an
/// already type-qualified bag selects the same key again.
pub fn rekey_by_type(forest: &mut [Component]) {
    for component in forest {
        rekey_component(component);
    }
}

fn rekey_component(component: &mut Component) {
    if component
        .properties
        .as_ref()
        .is_some_and(|bag| !bag.is_empty())
    {
        component.bag_key = BagKey::TypeQualified;
    }

    if let Some(bag) = component.properties.as_mut() {
        for entry in bag.values_mut() {
            match entry {
                BagEntry::Buttons(options) => {
                    for option in options {
                        rekey_by_type(&mut option.items);
                    }
                }
                BagEntry::RequiredFields(_) | BagEntry::Opaque(_) => {}
            }
        }
    }

    rekey_by_type(&mut component.children);
}
