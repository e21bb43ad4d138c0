//! # Form Components
//!
//! One form element as exchanged with both the form designer (flat,
//! parent-pointer addressed) and the client UI (nested, type-qualified).
//! The same struct serves both representations: the flat shape leaves
//! `children` empty and addresses structure through `parent_id`; the nested
//! shape is produced by the tree builder.
//!
//! The property bag's storage key is dynamic on the wire. Incoming documents
//! may carry the bag under the generic `"properties"` key or under a
//! type-qualified `"{type}Properties"` key (the client echoes the display
//! document back on submission), so `Component` implements its own
//! `Serialize`/`Deserialize`: deserialization accepts either spelling and
//! records which one arrived in [`BagKey`], serialization writes the key
//! that `bag_key` selects. This replaces the regex rewriting a string-level
//! gateway would do on every document.

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::property_bag::PropertyBag;

/// Which storage key a component's bag serializes under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BagKey {
    /// The generic `"properties"` key of the flat protocol.
    #[default]
    Generic,
    /// The `"{type}Properties"` key a type-aware reader resolves without
    /// consulting a schema.
    TypeQualified,
}

/// One form element.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Opaque identifier, unique within a single flat document.
    pub id: String,
    /// Reference to another component's `id` in the same document; `None`
    /// means root level.
    pub parent_id: Option<String>,
    /// Type tag selecting rendering behavior; serialized as `"type"`.
    pub kind: String,
    pub properties: Option<PropertyBag>,
    /// Storage key style for `properties`; flipped by the rekeyer.
    pub bag_key: BagKey,
    /// Populated only in the nested representation; serialized as `"items"`
    /// and omitted when empty.
    pub children: Vec<Component>,
}

impl Component {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            kind: kind.into(),
            properties: None,
            bag_key: BagKey::default(),
            children: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_properties(mut self, properties: PropertyBag) -> Self {
        self.properties = Some(properties);
        self
    }

    /// The wire key the bag serializes under for this component.
    pub fn properties_key(&self) -> String {
        match self.bag_key {
            BagKey::Generic => "properties".to_string(),
            BagKey::TypeQualified => format!("{}Properties", self.kind),
        }
    }
}

impl Serialize for Component {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        if let Some(parent_id) = &self.parent_id {
            map.serialize_entry("parentId", parent_id)?;
        }
        map.serialize_entry("type", &self.kind)?;
        if let Some(bag) = &self.properties {
            map.serialize_entry(&self.properties_key(), bag)?;
        }
        if !self.children.is_empty() {
            map.serialize_entry("items", &self.children)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Component {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ComponentVisitor;

        impl<'de> Visitor<'de> for ComponentVisitor {
            type Value = Component;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a form component object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut id: Option<String> = None;
                let mut parent_id: Option<String> = None;
                let mut kind: Option<String> = None;
                let mut properties: Option<PropertyBag> = None;
                let mut bag_key = BagKey::Generic;
                let mut children: Vec<Component> = Vec::new();

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "id" => id = Some(map.next_value()?),
                        "parentId" => parent_id = map.next_value::<Option<String>>()?,
                        "type" => kind = Some(map.next_value()?),
                        "items" => {
                            children = map.next_value::<Option<Vec<Component>>>()?.unwrap_or_default();
                        }
                        other if other.eq_ignore_ascii_case("properties") => {
                            bag_key = BagKey::Generic;
                            properties = map.next_value::<Option<PropertyBag>>()?;
                        }
                        other if other.ends_with("Properties") => {
                            bag_key = BagKey::TypeQualified;
                            properties = map.next_value::<Option<PropertyBag>>()?;
                        }
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                Ok(Component {
                    id: id.ok_or_else(|| de::Error::missing_field("id"))?,
                    parent_id,
                    kind: kind.ok_or_else(|| de::Error::missing_field("type"))?,
                    properties,
                    bag_key,
                    children,
                })
            }
        }

        deserializer.deserialize_map(ComponentVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_component_with_generic_bag() {
        let component: Component = serde_json::from_value(json!({
            "id": "b",
            "parentId": "a",
            "type": "input",
            "properties": { "label": "Name" }
        }))
        .unwrap();

        assert_eq!(component.id, "b");
        assert_eq!(component.parent_id.as_deref(), Some("a"));
        assert_eq!(component.kind, "input");
        assert_eq!(component.bag_key, BagKey::Generic);
        assert!(component.properties.is_some());
        assert!(component.children.is_empty());
    }

    #[test]
    fn test_type_qualified_bag_key_is_normalized() {
        // The client echoes the display document back with typed keys.
        let component: Component = serde_json::from_value(json!({
            "id": "b",
            "type": "input",
            "inputProperties": { "label": "Name" }
        }))
        .unwrap();

        assert_eq!(component.bag_key, BagKey::TypeQualified);
        assert!(component.properties.is_some());
    }

    #[test]
    fn test_capitalized_generic_key_is_generic() {
        let component: Component = serde_json::from_value(json!({
            "id": "b",
            "type": "input",
            "Properties": { "label": "Name" }
        }))
        .unwrap();

        assert_eq!(component.bag_key, BagKey::Generic);
    }

    #[test]
    fn test_serialization_follows_bag_key() {
        let mut component: Component = serde_json::from_value(json!({
            "id": "b",
            "type": "input",
            "properties": { "label": "Name" }
        }))
        .unwrap();

        component.bag_key = BagKey::TypeQualified;
        let value = serde_json::to_value(&component).unwrap();
        assert!(value.get("inputProperties").is_some());
        assert!(value.get("properties").is_none());
    }

    #[test]
    fn test_null_parent_and_unknown_keys_tolerated() {
        let component: Component = serde_json::from_value(json!({
            "id": "a",
            "parentId": null,
            "type": "group",
            "layoutHint": "wide"
        }))
        .unwrap();

        assert_eq!(component.parent_id, None);
        assert!(component.properties.is_none());
    }

    #[test]
    fn test_missing_type_is_rejected() {
        let result: Result<Component, _> = serde_json::from_value(json!({ "id": "a" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_children_omitted_from_output() {
        let component = Component::new("a", "group");
        let value = serde_json::to_value(&component).unwrap();
        assert!(value.get("items").is_none());
    }
}
