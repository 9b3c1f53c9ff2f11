use serde::{Deserialize, Serialize};

use super::geometry::Bounds;

/// Read-only snapshot of the host's open documents. Taken fresh for every
/// invocation and never cached across them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub active_document: Option<i64>,
}

impl Workspace {
    pub fn single(document: Document) -> Self {
        let id = document.id;
        Self {
            documents: vec![document],
            active_document: Some(id),
        }
    }

    pub fn active(&self) -> Option<&Document> {
        let id = self.active_document?;
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn active_mut(&mut self) -> Option<&mut Document> {
        let id = self.active_document?;
        self.documents.iter_mut().find(|d| d.id == id)
    }

    pub fn document(&self, id: i64) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default = "default_resolution")]
    pub resolution: f64,
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Index 0 is the topmost layer.
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default)]
    pub has_selection: bool,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub saved: bool,
}

fn default_resolution() -> f64 {
    72.0
}

fn default_mode() -> String {
    "RGB".to_string()
}

impl Document {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            width: 0.0,
            height: 0.0,
            resolution: default_resolution(),
            mode: default_mode(),
            layers: Vec::new(),
            channels: Vec::new(),
            has_selection: false,
            path: None,
            saved: false,
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn with_channel(mut self, name: &str) -> Self {
        self.channels.push(name.to_string());
        self
    }

    pub fn with_selection(mut self) -> Self {
        self.has_selection = true;
        self
    }

    /// Every layer, depth-first, groups before their children.
    pub fn all_layers(&self) -> Vec<&Layer> {
        let mut out = Vec::new();
        for layer in &self.layers {
            layer.flatten_into(&mut out);
        }
        out
    }

    pub fn layer_count(&self) -> usize {
        self.all_layers().len()
    }

    pub fn layer(&self, id: i64) -> Option<&Layer> {
        self.all_layers().into_iter().find(|l| l.id == id)
    }

    /// The whole canvas as a pixel rectangle.
    pub fn canvas(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.height, self.width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerKind {
    #[default]
    Pixel,
    Adjustment,
    Fill,
    Text,
    Shape,
    SmartObject,
    Group,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub kind: LayerKind,
    #[serde(default = "visible_default")]
    pub visible: bool,
    #[serde(default)]
    pub selected: bool,
    /// Pixel extent, when the host reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Layer>,
}

fn visible_default() -> bool {
    true
}

impl Layer {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: LayerKind::Pixel,
            visible: true,
            selected: false,
            bounds: None,
            children: Vec::new(),
        }
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn kind(mut self, kind: LayerKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    pub fn with_child(mut self, child: Layer) -> Self {
        self.kind = LayerKind::Group;
        self.children.push(child);
        self
    }

    fn flatten_into<'a>(&'a self, out: &mut Vec<&'a Layer>) {
        out.push(self);
        for child in &self.children {
            child.flatten_into(out);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn flattens_groups_depth_first() {
        let doc = Document::new(1, "Poster")
            .with_layer(
                Layer::new(10, "Group")
                    .with_child(Layer::new(11, "Title"))
                    .with_child(Layer::new(12, "Subtitle")),
            )
            .with_layer(Layer::new(2, "Background"));
        let ids: Vec<i64> = doc.all_layers().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![10, 11, 12, 2]);
    }

    #[test]
    fn fixture_json_fills_defaults() {
        let ws: Workspace = serde_json::from_str(
            r#"{
                "documents": [{ "id": 1, "name": "a.psd", "layers": [{ "id": 5, "name": "Sky" }] }],
                "activeDocument": 1
            }"#,
        )
        .unwrap();
        let doc = ws.active().unwrap();
        assert_eq!(doc.resolution, 72.0);
        assert!(!doc.has_selection);
        assert!(doc.layers[0].visible);
        assert_eq!(doc.layers[0].kind, LayerKind::Pixel);
    }

    #[test]
    fn no_active_document() {
        let ws = Workspace {
            documents: vec![Document::new(1, "a")],
            active_document: None,
        };
        assert!(ws.active().is_none());
        assert!(ws.document(1).is_some());
    }
}
