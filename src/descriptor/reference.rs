use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::DescriptorError;

/// How one segment of a reference chain picks its entity.
#[derive(Debug, Clone, PartialEq)]
pub enum RefForm {
    /// The class itself, e.g. the kind of thing a `make` creates.
    Class,
    Property(String),
    /// The currently targeted instance (`ordinal` / `targetEnum`).
    Ordinal,
    Id(i64),
    Name(String),
    /// Position among siblings of the class.
    Index(i64),
    /// Position relative to the current target.
    Offset(i64),
    Enum { tag: String, value: String },
}

/// Keys a segment may carry. Anything else starting with `_` is rejected.
const SEGMENT_KEYS: [&str; 8] = [
    "_ref", "_property", "_id", "_name", "_index", "_offset", "_enum", "_value",
];

#[derive(Debug, Clone, PartialEq)]
pub struct RefSegment {
    pub class: String,
    pub form: RefForm,
}

impl RefSegment {
    pub fn new(class: impl Into<String>, form: RefForm) -> Self {
        Self {
            class: class.into(),
            form,
        }
    }
}

impl Serialize for RefSegment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("_ref", &self.class)?;
        match &self.form {
            RefForm::Class => {}
            RefForm::Property(p) => map.serialize_entry("_property", p)?,
            RefForm::Ordinal => {
                map.serialize_entry("_enum", "ordinal")?;
                map.serialize_entry("_value", "targetEnum")?;
            }
            RefForm::Id(id) => map.serialize_entry("_id", id)?,
            RefForm::Name(name) => map.serialize_entry("_name", name)?,
            RefForm::Index(i) => map.serialize_entry("_index", i)?,
            RefForm::Offset(o) => map.serialize_entry("_offset", o)?,
            RefForm::Enum { tag, value } => {
                map.serialize_entry("_enum", tag)?;
                map.serialize_entry("_value", value)?;
            }
        }
        map.end()
    }
}

/// Ordered list of segments naming what an operation applies to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RefChain {
    segments: Vec<RefSegment>,
}

impl RefChain {
    pub fn new(segments: Vec<RefSegment>) -> Self {
        Self { segments }
    }

    /// `[{_ref: class}]`
    pub fn class(class: &str) -> Self {
        Self::new(vec![RefSegment::new(class, RefForm::Class)])
    }

    /// The active layer.
    pub fn target_layer() -> Self {
        Self::ordinal("layer")
    }

    pub fn ordinal(class: &str) -> Self {
        Self::new(vec![RefSegment::new(class, RefForm::Ordinal)])
    }

    pub fn layer_id(id: i64) -> Self {
        Self::new(vec![RefSegment::new("layer", RefForm::Id(id))])
    }

    pub fn property(class: &str, property: &str) -> Self {
        Self::new(vec![RefSegment::new(
            class,
            RefForm::Property(property.to_string()),
        )])
    }

    pub fn named(class: &str, name: &str) -> Self {
        Self::new(vec![RefSegment::new(class, RefForm::Name(name.to_string()))])
    }

    /// `layerEffects` of the active layer, the target of every layer style `set`.
    pub fn layer_effects() -> Self {
        Self::property("property", "layerEffects").then(RefSegment::new("layer", RefForm::Ordinal))
    }

    pub fn then(mut self, segment: RefSegment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn segments(&self) -> &[RefSegment] {
        &self.segments
    }

    pub fn first(&self) -> Option<&RefSegment> {
        self.segments.first()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Parse the wire form: either a single `{_ref: ...}` map or an array of them.
    pub fn from_json(value: &Value, path: &str) -> Result<Self, DescriptorError> {
        match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| parse_segment(item, &format!("{path}[{i}]")))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::new),
            Value::Object(_) => Ok(Self::new(vec![parse_segment(value, path)?])),
            _ => Err(DescriptorError::malformed(path, "reference must be a map or array")),
        }
    }
}

impl Serialize for RefChain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.segments.serialize(serializer)
    }
}

fn parse_segment(value: &Value, path: &str) -> Result<RefSegment, DescriptorError> {
    let map = value
        .as_object()
        .ok_or_else(|| DescriptorError::malformed(path, "reference segment must be a map"))?;
    let class = map
        .get("_ref")
        .and_then(Value::as_str)
        .ok_or_else(|| DescriptorError::malformed(path, "`_ref` must be a string"))?;
    if let Some(key) = map
        .keys()
        .find(|k| k.starts_with('_') && !SEGMENT_KEYS.contains(&k.as_str()))
    {
        return Err(DescriptorError::malformed(
            &format!("{path}.{key}"),
            "unsupported reference key",
        ));
    }

    let form = if let Some(p) = map.get("_property") {
        let p = p
            .as_str()
            .ok_or_else(|| DescriptorError::malformed(path, "`_property` must be a string"))?;
        RefForm::Property(p.to_string())
    } else if let Some(id) = map.get("_id") {
        let id = id
            .as_i64()
            .ok_or_else(|| DescriptorError::malformed(path, "`_id` must be an integer"))?;
        RefForm::Id(id)
    } else if let Some(name) = map.get("_name") {
        let name = name
            .as_str()
            .ok_or_else(|| DescriptorError::malformed(path, "`_name` must be a string"))?;
        RefForm::Name(name.to_string())
    } else if let Some(index) = map.get("_index") {
        let index = index
            .as_i64()
            .ok_or_else(|| DescriptorError::malformed(path, "`_index` must be an integer"))?;
        RefForm::Index(index)
    } else if let Some(offset) = map.get("_offset") {
        let offset = offset
            .as_i64()
            .ok_or_else(|| DescriptorError::malformed(path, "`_offset` must be an integer"))?;
        RefForm::Offset(offset)
    } else if let Some(tag) = map.get("_enum") {
        let tag = tag
            .as_str()
            .ok_or_else(|| DescriptorError::malformed(path, "`_enum` must be a string"))?;
        let value = map
            .get("_value")
            .and_then(Value::as_str)
            .ok_or_else(|| DescriptorError::malformed(path, "`_enum` requires a string `_value`"))?;
        if tag == "ordinal" && value == "targetEnum" {
            RefForm::Ordinal
        } else {
            RefForm::Enum {
                tag: tag.to_string(),
                value: value.to_string(),
            }
        }
    } else {
        RefForm::Class
    };

    Ok(RefSegment::new(class, form))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn layer_effects_chain_wire_form() {
        let json = serde_json::to_value(RefChain::layer_effects()).unwrap();
        assert_eq!(
            json,
            json!([
                { "_ref": "property", "_property": "layerEffects" },
                { "_ref": "layer", "_enum": "ordinal", "_value": "targetEnum" }
            ])
        );
    }

    #[test]
    fn parses_every_segment_form() {
        let wire = json!([
            { "_ref": "contentLayer" },
            { "_ref": "color", "_property": "foregroundColor" },
            { "_ref": "layer", "_id": 7 },
            { "_ref": "channel", "_name": "Alpha 1" },
            { "_ref": "layer", "_enum": "ordinal", "_value": "targetEnum" },
            { "_ref": "document", "_enum": "ordinal", "_value": "first" }
        ]);
        let chain = RefChain::from_json(&wire, "_target").unwrap();
        let forms: Vec<&RefForm> = chain.segments().iter().map(|s| &s.form).collect();
        assert_eq!(forms[0], &RefForm::Class);
        assert_eq!(forms[1], &RefForm::Property("foregroundColor".into()));
        assert_eq!(forms[2], &RefForm::Id(7));
        assert_eq!(forms[3], &RefForm::Name("Alpha 1".into()));
        assert_eq!(forms[4], &RefForm::Ordinal);
        assert!(matches!(forms[5], RefForm::Enum { value, .. } if value == "first"));

        // Parsing the serialized form gives the same chain back.
        let again = RefChain::from_json(&serde_json::to_value(&chain).unwrap(), "_target").unwrap();
        assert_eq!(again, chain);
    }

    #[test]
    fn rejects_segment_without_class() {
        let err = RefChain::from_json(&json!([{ "_id": 3 }]), "_target").unwrap_err();
        assert!(err.to_string().contains("_target[0]"));
    }

    #[test]
    fn index_and_offset_forms_round_trip() {
        let wire = json!([
            { "_ref": "layer", "_index": 3 },
            { "_ref": "document", "_offset": -1 }
        ]);
        let chain = RefChain::from_json(&wire, "_target").unwrap();
        assert_eq!(chain.segments()[0].form, RefForm::Index(3));
        assert_eq!(chain.segments()[1].form, RefForm::Offset(-1));
        assert_eq!(serde_json::to_value(&chain).unwrap(), wire);
    }

    #[test]
    fn unknown_segment_key_is_malformed() {
        let err = RefChain::from_json(&json!([{ "_ref": "layer", "_foo": 1 }]), "_target")
            .unwrap_err();
        assert_eq!(err.to_string(), "_target[0]._foo: unsupported reference key");

        let err = RefChain::from_json(&json!({ "_ref": "layer", "_index": "top" }), "_target")
            .unwrap_err();
        assert!(err.to_string().contains("`_index` must be an integer"));
    }
}
