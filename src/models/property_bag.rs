//! # Property Bags
//!
//! A component's open-ended field container. The wire shape is a JSON object
//! carrying arbitrary component properties, but two keys have recognized
//! structure: `submitRequiredFields` (values the component contributes to a
//! submission) and `buttons` (mutually exclusive nested subtrees). Rather
//! than probing a dynamic object for key existence, each entry is classified
//! at deserialization time into the closed [`BagEntry`] variant, so the
//! rekeyer and extractor can pattern-match exhaustively.
//!
//! Entry order is preserved end to end: the bag is an insertion-ordered map
//! and serializes its entries in the order they arrived.

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::component::Component;

/// Recognized bag key for required-field descriptors.
pub const SUBMIT_REQUIRED_FIELDS_KEY: &str = "submitRequiredFields";

/// Recognized bag key for mutually exclusive button branches.
pub const BUTTONS_KEY: &str = "buttons";

/// One value a component must contribute to a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredFieldDescriptor {
    pub field_name: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub is_required: bool,
}

/// One branch of a mutually exclusive button group. Exactly one branch is
/// selected at submission time by matching the owning component's selector
/// value against `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonOption {
    pub id: String,
    #[serde(default)]
    pub items: Vec<Component>,
}

/// A single classified bag entry.
#[derive(Debug, Clone, PartialEq)]
pub enum BagEntry {
    /// The `submitRequiredFields` entry.
    RequiredFields(Vec<RequiredFieldDescriptor>),
    /// The `buttons` entry.
    Buttons(Vec<ButtonOption>),
    /// Any other property, carried through untouched.
    Opaque(Value),
}

/// Insertion-ordered bag of component properties with recognized keys
/// resolved into [`BagEntry`] variants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
    entries: IndexMap<String, BagEntry>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts an entry under `name`, replacing any previous entry with the
    /// same name while keeping its position.
    pub fn insert(&mut self, name: impl Into<String>, entry: BagEntry) {
        self.entries.insert(name.into(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&BagEntry> {
        self.entries.get(name)
    }

    /// The `submitRequiredFields` descriptors, if present with the
    /// recognized shape.
    pub fn required_fields(&self) -> Option<&[RequiredFieldDescriptor]> {
        match self.entries.get(SUBMIT_REQUIRED_FIELDS_KEY) {
            Some(BagEntry::RequiredFields(fields)) => Some(fields),
            _ => None,
        }
    }

    /// The `buttons` branches, if present with the recognized shape.
    pub fn buttons(&self) -> Option<&[ButtonOption]> {
        match self.entries.get(BUTTONS_KEY) {
            Some(BagEntry::Buttons(options)) => Some(options),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BagEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut BagEntry> {
        self.entries.values_mut()
    }
}

impl Serialize for PropertyBag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            match entry {
                BagEntry::RequiredFields(fields) => map.serialize_entry(name, fields)?,
                BagEntry::Buttons(options) => map.serialize_entry(name, options)?,
                BagEntry::Opaque(value) => map.serialize_entry(name, value)?,
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PropertyBag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BagVisitor;

        impl<'de> Visitor<'de> for BagVisitor {
            type Value = PropertyBag;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a component property bag object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut bag = PropertyBag::new();
                while let Some(name) = map.next_key::<String>()? {
                    // A recognized key may carry an explicit null; treat it
                    // the same as an absent entry's empty sequence.
                    let entry = match name.as_str() {
                        SUBMIT_REQUIRED_FIELDS_KEY => BagEntry::RequiredFields(
                            map.next_value::<Option<Vec<RequiredFieldDescriptor>>>()?
                                .unwrap_or_default(),
                        ),
                        BUTTONS_KEY => BagEntry::Buttons(
                            map.next_value::<Option<Vec<ButtonOption>>>()?
                                .unwrap_or_default(),
                        ),
                        _ => BagEntry::Opaque(map.next_value()?),
                    };
                    bag.insert(name, entry);
                }
                Ok(bag)
            }
        }

        deserializer.deserialize_map(BagVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recognized_keys_are_classified() {
        let bag: PropertyBag = serde_json::from_value(json!({
            "label": "Shipping method",
            "submitRequiredFields": [
                { "fieldName": "method", "value": "express", "isRequired": true }
            ],
            "buttons": [
                { "id": "express", "items": [] }
            ]
        }))
        .unwrap();

        assert_eq!(bag.len(), 3);
        assert_eq!(bag.required_fields().unwrap().len(), 1);
        assert_eq!(bag.buttons().unwrap()[0].id, "express");
        assert!(matches!(bag.get("label"), Some(BagEntry::Opaque(_))));
    }

    #[test]
    fn test_null_recognized_key_is_empty() {
        let bag: PropertyBag =
            serde_json::from_value(json!({ "submitRequiredFields": null })).unwrap();
        assert_eq!(bag.required_fields(), Some(&[][..]));
    }

    #[test]
    fn test_entry_order_preserved() {
        let raw = json!({
            "zeta": 1,
            "alpha": 2,
            "submitRequiredFields": []
        });
        let bag: PropertyBag = serde_json::from_value(raw).unwrap();
        let names: Vec<&str> = bag.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "submitRequiredFields"]);
    }

    #[test]
    fn test_malformed_required_fields_shape_is_rejected() {
        let result: Result<PropertyBag, _> =
            serde_json::from_value(json!({ "submitRequiredFields": "not-a-list" }));
        assert!(result.is_err());
    }
}
