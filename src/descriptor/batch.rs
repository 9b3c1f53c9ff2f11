use serde::{Serialize, Serializer};
use serde_json::Value;

use super::{Descriptor, DescriptorError, ObjectNode};

/// Ordered run of root operations submitted in one host call. Order is never
/// changed once built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Batch {
    nodes: Vec<ObjectNode>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(node: ObjectNode) -> Self {
        Self { nodes: vec![node] }
    }

    pub fn push(&mut self, node: ObjectNode) {
        self.nodes.push(node);
    }

    pub fn with(mut self, node: ObjectNode) -> Self {
        self.push(node);
        self
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[ObjectNode] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ObjectNode> {
        self.nodes.iter()
    }

    /// Every root must carry a type tag.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        match self.nodes.iter().position(|n| n.type_tag().is_none()) {
            Some(index) => Err(DescriptorError::UntaggedRoot { index }),
            None => Ok(()),
        }
    }

    pub fn to_json(&self) -> Value {
        Value::Array(
            self.nodes
                .iter()
                .map(|n| serde_json::to_value(n).unwrap_or(Value::Null))
                .collect(),
        )
    }

    /// Compact wire text. Equal batches produce identical strings.
    pub fn canonical(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse a caller-supplied array of root objects.
    pub fn from_json(value: &Value) -> Result<Self, DescriptorError> {
        let items = value
            .as_array()
            .ok_or_else(|| DescriptorError::malformed("$", "batch must be an array"))?;
        let mut batch = Self::new();
        for (i, item) in items.iter().enumerate() {
            let path = format!("$[{i}]");
            match Descriptor::from_json(item).map_err(|e| reroot(e, &path))? {
                Descriptor::Object(node) => batch.push(node),
                _ => return Err(DescriptorError::malformed(&path, "root must be an object")),
            }
        }
        batch.validate()?;
        Ok(batch)
    }
}

fn reroot(err: DescriptorError, prefix: &str) -> DescriptorError {
    match err {
        DescriptorError::Malformed { path, message } => DescriptorError::Malformed {
            path: path.replacen('$', prefix, 1),
            message,
        },
        other => other,
    }
}

impl Serialize for Batch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.nodes.serialize(serializer)
    }
}

impl FromIterator<ObjectNode> for Batch {
    fn from_iter<I: IntoIterator<Item = ObjectNode>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a ObjectNode;
    type IntoIter = std::slice::Iter<'a, ObjectNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
