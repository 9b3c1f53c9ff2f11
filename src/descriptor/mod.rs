//! The host automation protocol as a typed tree.
//!
//! A [`Descriptor`] is one node of a request: a typed object, an enumeration
//! selector, a class name, a reference chain, a list, or a leaf scalar. Root nodes are
//! [`ObjectNode`]s whose type tag names the operation (`make`, `set`,
//! `gaussianBlur`, ...); a [`Batch`] is an ordered run of them.
//!
//! Serialization produces the host's JSON wire form (`_obj`, `_enum`/`_value`,
//! `_class`, `_ref`, `_unit`). Field order is insertion order, so equal trees serialize to
//! byte-identical JSON.

pub mod action;
pub mod batch;
pub mod reference;
pub mod unit;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

pub use batch::Batch;
pub use reference::{RefChain, RefForm, RefSegment};
pub use unit::{UnitKind, UnitValue};

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum DescriptorError {
    #[error("`{action}` payload must be `{expected}`, found `{found}`")]
    TagMismatch {
        action: String,
        expected: String,
        found: String,
    },
    #[error("root node {index} has no type tag")]
    UntaggedRoot { index: usize },
    #[error("unknown unit tag `{0}`")]
    UnknownUnit(String),
    #[error("{path}: {message}")]
    Malformed { path: String, message: String },
}

impl DescriptorError {
    pub fn malformed(path: &str, message: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Unit(UnitValue),
}

/// Closed-vocabulary selector, e.g. `{_enum: "blendMode", _value: "multiply"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumNode {
    pub enum_tag: String,
    pub value: String,
}

impl EnumNode {
    pub fn new(enum_tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            enum_tag: enum_tag.into(),
            value: value.into(),
        }
    }
}

/// A typed record. `type_tag` is `None` only for plain nested records (service
/// option maps and the like); roots and operation payloads always carry a tag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectNode {
    type_tag: Option<String>,
    fields: IndexMap<String, Descriptor>,
}

impl ObjectNode {
    pub fn new(type_tag: impl Into<String>) -> Self {
        Self {
            type_tag: Some(type_tag.into()),
            fields: IndexMap::new(),
        }
    }

    /// An untagged record.
    pub fn record() -> Self {
        Self::default()
    }

    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    pub fn with(mut self, name: &str, value: impl Into<Descriptor>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds the field only when a value is present.
    pub fn with_opt<T: Into<Descriptor>>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.with(name, v),
            None => self,
        }
    }

    pub fn with_target(self, target: RefChain) -> Self {
        self.with("_target", target)
    }

    pub fn insert(&mut self, name: &str, value: impl Into<Descriptor>) {
        self.fields.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.fields.get(name)
    }

    pub fn target(&self) -> Option<&RefChain> {
        match self.fields.get("_target") {
            Some(Descriptor::Ref(chain)) => Some(chain),
            _ => None,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Descriptor)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Follow a path of field names through nested objects.
    pub fn get_path(&self, path: &[&str]) -> Option<&Descriptor> {
        let (last, parents) = path.split_last()?;
        let mut node = self;
        for name in parents {
            node = node.get(name)?.as_object()?;
        }
        node.get(last)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    Object(ObjectNode),
    Enum(EnumNode),
    /// A bare class name, `{_class: tag}`, e.g. a document color mode.
    Class(String),
    Ref(RefChain),
    List(Vec<Descriptor>),
    Scalar(Scalar),
}

impl Descriptor {
    pub fn enumerated(enum_tag: &str, value: &str) -> Self {
        Self::Enum(EnumNode::new(enum_tag, value))
    }

    pub fn class(tag: &str) -> Self {
        Self::Class(tag.to_string())
    }

    pub fn as_object(&self) -> Option<&ObjectNode> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Descriptor]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumNode> {
        match self {
            Self::Enum(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Scalar(Scalar::Int(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Scalar(Scalar::Int(n)) => Some(*n as f64),
            Self::Scalar(Scalar::Float(f)) => Some(*f),
            Self::Scalar(Scalar::Unit(u)) => Some(u.value),
            _ => None,
        }
    }

    pub fn as_unit(&self) -> Option<UnitValue> {
        match self {
            Self::Scalar(Scalar::Unit(u)) => Some(*u),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Parse the host's wire form, checking the grammar as it goes.
    pub fn from_json(value: &Value) -> Result<Self, DescriptorError> {
        parse(value, "$")
    }
}

fn parse(value: &Value, path: &str) -> Result<Descriptor, DescriptorError> {
    match value {
        Value::Null => Err(DescriptorError::malformed(path, "null is not a descriptor")),
        Value::Bool(b) => Ok(Descriptor::Scalar(Scalar::Bool(*b))),
        Value::Number(n) => Ok(match n.as_i64() {
            Some(i) => Descriptor::Scalar(Scalar::Int(i)),
            None => Descriptor::Scalar(Scalar::Float(n.as_f64().unwrap_or_default())),
        }),
        Value::String(s) => Ok(Descriptor::Scalar(Scalar::Str(s.clone()))),
        Value::Array(items) => {
            let is_chain = !items.is_empty()
                && items
                    .iter()
                    .all(|i| i.as_object().is_some_and(|m| m.contains_key("_ref")));
            if is_chain {
                RefChain::from_json(value, path).map(Descriptor::Ref)
            } else {
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| parse(item, &format!("{path}[{i}]")))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Descriptor::List)
            }
        }
        Value::Object(map) => {
            if map.contains_key("_ref") {
                return RefChain::from_json(value, path).map(Descriptor::Ref);
            }
            if let Some(unit) = map.get("_unit") {
                let tag = unit
                    .as_str()
                    .ok_or_else(|| DescriptorError::malformed(path, "`_unit` must be a string"))?;
                let kind = UnitKind::from_tag(tag)
                    .ok_or_else(|| DescriptorError::UnknownUnit(tag.to_string()))?;
                let v = map
                    .get("_value")
                    .and_then(Value::as_f64)
                    .ok_or_else(|| DescriptorError::malformed(path, "`_unit` requires a numeric `_value`"))?;
                return Ok(Descriptor::Scalar(Scalar::Unit(UnitValue::new(kind, v))));
            }
            if let Some(tag) = map.get("_enum") {
                let tag = tag
                    .as_str()
                    .ok_or_else(|| DescriptorError::malformed(path, "`_enum` must be a string"))?;
                let v = map
                    .get("_value")
                    .and_then(Value::as_str)
                    .ok_or_else(|| DescriptorError::malformed(path, "`_enum` requires a string `_value`"))?;
                return Ok(Descriptor::enumerated(tag, v));
            }
            if let Some(tag) = map.get("_class") {
                let tag = tag
                    .as_str()
                    .ok_or_else(|| DescriptorError::malformed(path, "`_class` must be a string"))?;
                if map.len() > 1 {
                    return Err(DescriptorError::malformed(path, "`_class` takes no other keys"));
                }
                return Ok(Descriptor::class(tag));
            }

            let mut node = match map.get("_obj") {
                Some(Value::String(tag)) => ObjectNode::new(tag.as_str()),
                Some(_) => return Err(DescriptorError::malformed(path, "`_obj` must be a string")),
                None => ObjectNode::record(),
            };
            for (key, field) in map {
                let field_path = format!("{path}.{key}");
                match key.as_str() {
                    "_obj" => {}
                    "_target" => {
                        node.insert(key, RefChain::from_json(field, &field_path)?);
                    }
                    // batchPlay command flags travel with the node.
                    "_isCommand" | "_options" => node.insert(key, parse(field, &field_path)?),
                    k if k.starts_with('_') => {
                        return Err(DescriptorError::malformed(
                            &field_path,
                            "unsupported reserved key",
                        ));
                    }
                    _ => node.insert(key, parse(field, &field_path)?),
                }
            }
            Ok(Descriptor::Object(node))
        }
    }
}

// ── Wire serialization ──────────────────────────────────────────

impl Serialize for ObjectNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(tag) = &self.type_tag {
            map.serialize_entry("_obj", tag)?;
        }
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl Serialize for Descriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Object(o) => o.serialize(serializer),
            Self::Enum(e) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("_enum", &e.enum_tag)?;
                map.serialize_entry("_value", &e.value)?;
                map.end()
            }
            Self::Class(tag) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("_class", tag)?;
                map.end()
            }
            Self::Ref(chain) => chain.serialize(serializer),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Scalar(Scalar::Bool(b)) => serializer.serialize_bool(*b),
            Self::Scalar(Scalar::Int(n)) => serializer.serialize_i64(*n),
            Self::Scalar(Scalar::Float(f)) => serializer.serialize_f64(*f),
            Self::Scalar(Scalar::Str(s)) => serializer.serialize_str(s),
            Self::Scalar(Scalar::Unit(u)) => u.serialize(serializer),
        }
    }
}

// ── Conversions ─────────────────────────────────────────────────

impl From<ObjectNode> for Descriptor {
    fn from(o: ObjectNode) -> Self {
        Self::Object(o)
    }
}

impl From<EnumNode> for Descriptor {
    fn from(e: EnumNode) -> Self {
        Self::Enum(e)
    }
}

impl From<RefChain> for Descriptor {
    fn from(r: RefChain) -> Self {
        Self::Ref(r)
    }
}

impl From<UnitValue> for Descriptor {
    fn from(u: UnitValue) -> Self {
        Self::Scalar(Scalar::Unit(u))
    }
}

impl From<bool> for Descriptor {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Descriptor {
    fn from(n: i64) -> Self {
        Self::Scalar(Scalar::Int(n))
    }
}

impl From<i32> for Descriptor {
    fn from(n: i32) -> Self {
        Self::Scalar(Scalar::Int(i64::from(n)))
    }
}

impl From<u8> for Descriptor {
    fn from(n: u8) -> Self {
        Self::Scalar(Scalar::Int(i64::from(n)))
    }
}

impl From<u32> for Descriptor {
    fn from(n: u32) -> Self {
        Self::Scalar(Scalar::Int(i64::from(n)))
    }
}

impl From<f64> for Descriptor {
    fn from(f: f64) -> Self {
        Self::Scalar(Scalar::Float(f))
    }
}

impl From<&str> for Descriptor {
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::Str(s.to_string()))
    }
}

impl From<String> for Descriptor {
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::Str(s))
    }
}

impl<T: Into<Descriptor>> From<Vec<T>> for Descriptor {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ObjectNode {
        ObjectNode::new("set")
            .with_target(RefChain::target_layer())
            .with(
                "to",
                ObjectNode::new("layer")
                    .with("name", "Sky")
                    .with("opacity", UnitValue::percent(80.0))
                    .with("mode", Descriptor::enumerated("blendMode", "multiply")),
            )
            .with("levels", vec![0_i64, 255])
    }

    #[test]
    fn serializes_wire_form_in_insertion_order() {
        let text = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            text,
            r#"{"_obj":"set","_target":[{"_ref":"layer","_enum":"ordinal","_value":"targetEnum"}],"to":{"_obj":"layer","name":"Sky","opacity":{"_unit":"percentUnit","_value":80.0},"mode":{"_enum":"blendMode","_value":"multiply"}},"levels":[0,255]}"#
        );
    }

    #[test]
    fn parse_inverts_serialize() {
        let node = Descriptor::Object(sample());
        let parsed = Descriptor::from_json(&node.to_json()).unwrap();
        assert_eq!(parsed, node);
    }

    #[test]
    fn get_path_walks_nested_objects() {
        let node = sample();
        let mode = node.get_path(&["to", "mode"]).and_then(Descriptor::as_enum).unwrap();
        assert_eq!(mode.value, "multiply");
        assert!(node.get_path(&["to", "missing"]).is_none());
        assert!(node.get_path(&[]).is_none());
    }

    #[test]
    fn untagged_records_omit_obj() {
        let node = ObjectNode::record().with("gi_SEED", -1_i64);
        assert_eq!(serde_json::to_value(&node).unwrap(), json!({ "gi_SEED": -1 }));
    }

    #[test]
    fn parse_rejects_bad_grammar() {
        assert!(matches!(
            Descriptor::from_json(&json!({ "_obj": 3 })),
            Err(DescriptorError::Malformed { .. })
        ));
        assert!(matches!(
            Descriptor::from_json(&json!({ "_unit": "furlongUnit", "_value": 1 })),
            Err(DescriptorError::UnknownUnit(_))
        ));
        assert!(matches!(
            Descriptor::from_json(&json!({ "_enum": "blendMode" })),
            Err(DescriptorError::Malformed { .. })
        ));
        let err = Descriptor::from_json(&json!({ "_obj": "make", "inner": { "_kind": "local" } }))
            .unwrap_err();
        assert_eq!(err.to_string(), "$.inner._kind: unsupported reserved key");
    }

    #[test]
    fn command_flags_survive_a_round_trip() {
        let wire = json!([{
            "_obj": "ripple",
            "_target": [{ "_ref": "layer", "_enum": "ordinal", "_value": "targetEnum" }],
            "amount": 100,
            "_isCommand": true,
            "_options": { "dialogOptions": "dontDisplay" }
        }]);
        let batch = Batch::from_json(&wire).unwrap();
        let node = &batch.nodes()[0];
        assert_eq!(node.get("_isCommand"), Some(&Descriptor::from(true)));
        assert_eq!(batch.to_json(), wire);
        assert_eq!(
            batch.canonical(),
            r#"[{"_obj":"ripple","_target":[{"_ref":"layer","_enum":"ordinal","_value":"targetEnum"}],"amount":100,"_isCommand":true,"_options":{"dialogOptions":"dontDisplay"}}]"#
        );
    }

    #[test]
    fn class_nodes_stand_alone() {
        let node = ObjectNode::new("document").with("mode", Descriptor::class("RGBColorMode"));
        let wire = serde_json::to_value(&node).unwrap();
        assert_eq!(wire, json!({ "_obj": "document", "mode": { "_class": "RGBColorMode" } }));
        assert_eq!(Descriptor::from_json(&wire).unwrap(), Descriptor::Object(node));

        let err = Descriptor::from_json(&json!({ "_class": "RGBColorMode", "depth": 8 })).unwrap_err();
        assert_eq!(err.to_string(), "$: `_class` takes no other keys");
    }
}
