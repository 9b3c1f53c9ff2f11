//! Symbolic identifier → live handle resolution against a workspace snapshot.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::BridgeError;
use crate::model::{Document, Layer, Workspace};

/// How a caller names a layer, channel or document: a numeric id or a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TargetRef {
    Id(i64),
    Name(String),
}

impl TargetRef {
    /// The id this identifier should be tried as first, if any. Names that
    /// parse as integers count.
    fn as_id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Name(name) => name.trim().parse().ok(),
        }
    }

    fn as_name(&self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::Name(name) => name.clone(),
        }
    }
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => write!(f, "\"{name}\""),
        }
    }
}

impl From<i64> for TargetRef {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for TargetRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Layer,
    Channel,
    Document,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Layer => "Layer",
            Self::Channel => "Channel",
            Self::Document => "Document",
        })
    }
}

/// A resolved entity. Valid only for the invocation that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetHandle {
    pub kind: TargetKind,
    /// Channels are addressed by name and carry no id.
    pub id: Option<i64>,
    pub name: String,
}

impl TargetHandle {
    fn layer(layer: &Layer) -> Self {
        Self {
            kind: TargetKind::Layer,
            id: Some(layer.id),
            name: layer.name.clone(),
        }
    }
}

pub fn resolve(
    workspace: &Workspace,
    kind: TargetKind,
    target: &TargetRef,
) -> Result<TargetHandle, BridgeError> {
    match kind {
        TargetKind::Layer => {
            let doc = workspace.active().ok_or(BridgeError::NoDocument)?;
            resolve_layer(doc, target)
        }
        TargetKind::Channel => {
            let doc = workspace.active().ok_or(BridgeError::NoDocument)?;
            resolve_channel(doc, target)
        }
        TargetKind::Document => resolve_document(workspace, target),
    }
}

/// Id first, then exact name, across the flattened layer tree.
pub fn resolve_layer(doc: &Document, target: &TargetRef) -> Result<TargetHandle, BridgeError> {
    let layers = doc.all_layers();
    let by_id = target
        .as_id()
        .and_then(|id| layers.iter().find(|l| l.id == id));
    let name = target.as_name();
    by_id
        .or_else(|| layers.iter().find(|l| l.name == name))
        .map(|l| TargetHandle::layer(l))
        .ok_or_else(|| not_found(TargetKind::Layer, target))
}

pub fn resolve_channel(doc: &Document, target: &TargetRef) -> Result<TargetHandle, BridgeError> {
    let name = target.as_name();
    doc.channels
        .iter()
        .find(|c| **c == name)
        .map(|c| TargetHandle {
            kind: TargetKind::Channel,
            id: None,
            name: c.clone(),
        })
        .ok_or_else(|| not_found(TargetKind::Channel, target))
}

pub fn resolve_document(
    workspace: &Workspace,
    target: &TargetRef,
) -> Result<TargetHandle, BridgeError> {
    let by_id = target.as_id().and_then(|id| workspace.document(id));
    let name = target.as_name();
    by_id
        .or_else(|| workspace.documents.iter().find(|d| d.name == name))
        .map(|d| TargetHandle {
            kind: TargetKind::Document,
            id: Some(d.id),
            name: d.name.clone(),
        })
        .ok_or_else(|| not_found(TargetKind::Document, target))
}

fn not_found(kind: TargetKind, target: &TargetRef) -> BridgeError {
    BridgeError::not_found(format!("{kind} {target}"))
}

// ── Created-layer recovery ──────────────────────────────────────

/// Which rule identified a layer the host just created. Only `ReportedId`
/// is exact; the others are heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatedLayerStrategy {
    ReportedId,
    Selected,
    Topmost,
}

impl CreatedLayerStrategy {
    pub fn is_exact(self) -> bool {
        matches!(self, Self::ReportedId)
    }
}

/// Find the layer a host operation created, trying in order: the `layerID`
/// reported in the first result record, the first selected top-level layer,
/// the topmost layer.
pub fn resolve_created_layer(
    doc: &Document,
    results: &[Value],
) -> Option<(TargetHandle, CreatedLayerStrategy)> {
    let reported = results
        .first()
        .and_then(|r| r.get("layerID"))
        .and_then(Value::as_i64)
        .filter(|id| *id != 0);
    if let Some(id) = reported {
        if let Ok(handle) = resolve_layer(doc, &TargetRef::Id(id)) {
            return Some((handle, CreatedLayerStrategy::ReportedId));
        }
    }

    let (layer, strategy) = match doc.layers.iter().find(|l| l.selected) {
        Some(layer) => (layer, CreatedLayerStrategy::Selected),
        None => (doc.layers.first()?, CreatedLayerStrategy::Topmost),
    };
    warn!(
        layer = layer.id,
        ?strategy,
        reported = ?reported,
        "created layer identified heuristically"
    );
    Some((TargetHandle::layer(layer), strategy))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> Document {
        Document::new(1, "Poster")
            .with_layer(Layer::new(3, "Title"))
            .with_layer(Layer::new(2, "42"))
            .with_layer(Layer::new(1, "Background"))
            .with_channel("Alpha 1")
    }

    #[test]
    fn layers_resolve_by_id_then_name() {
        let d = doc();
        assert_eq!(resolve_layer(&d, &TargetRef::Id(3)).unwrap().name, "Title");
        assert_eq!(resolve_layer(&d, &"Background".into()).unwrap().id, Some(1));
        // A numeric string is an id before it is a name.
        assert_eq!(resolve_layer(&d, &"2".into()).unwrap().name, "42");
        // No layer has id 42, so the name wins.
        assert_eq!(resolve_layer(&d, &TargetRef::Id(42)).unwrap().id, Some(2));
    }

    #[test]
    fn not_found_only_when_absent() {
        let d = doc();
        let err = resolve_layer(&d, &TargetRef::Id(99)).unwrap_err();
        assert_eq!(err.to_string(), "Layer 99 not found");
        assert!(resolve_layer(&d, &"title".into()).is_err());
        for l in d.all_layers() {
            assert!(resolve_layer(&d, &TargetRef::Id(l.id)).is_ok());
        }
    }

    #[test]
    fn nested_layers_are_found() {
        let d = Document::new(1, "a")
            .with_layer(Layer::new(10, "Group").with_child(Layer::new(11, "Inner")));
        assert_eq!(resolve_layer(&d, &"Inner".into()).unwrap().id, Some(11));
    }

    #[test]
    fn channels_by_name_and_documents_by_id_or_name() {
        let ws = Workspace::single(doc());
        let ch = resolve(&ws, TargetKind::Channel, &"Alpha 1".into()).unwrap();
        assert_eq!(ch.id, None);
        assert!(resolve(&ws, TargetKind::Channel, &"Alpha 2".into()).is_err());

        assert_eq!(resolve(&ws, TargetKind::Document, &TargetRef::Id(1)).unwrap().name, "Poster");
        assert_eq!(resolve(&ws, TargetKind::Document, &"Poster".into()).unwrap().id, Some(1));
        assert!(resolve(&ws, TargetKind::Document, &TargetRef::Id(2)).is_err());
    }

    #[test]
    fn layer_lookup_without_document() {
        let ws = Workspace::default();
        let err = resolve(&ws, TargetKind::Layer, &TargetRef::Id(1)).unwrap_err();
        assert_eq!(err, BridgeError::NoDocument);
    }

    #[test]
    fn created_layer_prefers_reported_id() {
        let d = doc();
        let (h, s) = resolve_created_layer(&d, &[json!({ "layerID": 2 })]).unwrap();
        assert_eq!(h.id, Some(2));
        assert_eq!(s, CreatedLayerStrategy::ReportedId);
        assert!(s.is_exact());
    }

    #[test]
    fn created_layer_falls_back_to_selected_then_topmost() {
        let mut d = doc();
        d.layers[1].selected = true;
        let (h, s) = resolve_created_layer(&d, &[json!({ "layerID": 77 })]).unwrap();
        assert_eq!((h.id, s), (Some(2), CreatedLayerStrategy::Selected));

        let d = doc();
        let (h, s) = resolve_created_layer(&d, &[]).unwrap();
        assert_eq!((h.id, s), (Some(3), CreatedLayerStrategy::Topmost));

        // layerID 0 means "not reported".
        let (_, s) = resolve_created_layer(&d, &[json!({ "layerID": 0 })]).unwrap();
        assert_eq!(s, CreatedLayerStrategy::Topmost);
    }

    #[test]
    fn created_layer_on_empty_document() {
        assert!(resolve_created_layer(&Document::new(1, "a"), &[]).is_none());
    }
}
