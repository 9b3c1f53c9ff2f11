#![allow(clippy::needless_pass_by_value)]

//! Read-only tools. These work from a workspace snapshot and never submit.

use serde_json::{json, Value};

use crate::error::BridgeError;
use crate::host::Host;
use crate::model::{Document, Layer};
use crate::registry::catalog::help_text;
use crate::registry::params::HelpParams;
use crate::registry::{registry, ToolOutput};

fn active_document(host: &dyn Host) -> Result<Document, BridgeError> {
    let workspace = host.workspace()?;
    workspace.active().cloned().ok_or(BridgeError::NoDocument)
}

pub fn help(_host: &mut dyn Host, p: HelpParams) -> Result<ToolOutput, BridgeError> {
    Ok(ToolOutput::unit(help_text(p.topic.as_deref())))
}

pub fn get_documents(host: &mut dyn Host) -> Result<ToolOutput, BridgeError> {
    let workspace = host.workspace()?;
    let docs: Vec<Value> = workspace
        .documents
        .iter()
        .map(|d| {
            json!({
                "id": d.id,
                "name": d.name,
                "active": workspace.active_document == Some(d.id),
            })
        })
        .collect();
    Ok(ToolOutput::data(
        format!("{} open document(s).", docs.len()),
        Value::Array(docs),
    ))
}

/// A document counts as saved when it has a path on disk.
pub fn get_document_info(host: &mut dyn Host) -> Result<ToolOutput, BridgeError> {
    let doc = active_document(host)?;
    let path = doc.path.clone().unwrap_or_default();
    let info = json!({
        "id": doc.id,
        "name": doc.name,
        "width": doc.width,
        "height": doc.height,
        "colorMode": doc.mode,
        "resolution": doc.resolution,
        "path": path,
        "saved": !path.is_empty(),
        "hasUnsavedChanges": !doc.saved,
        "layerCount": doc.layer_count(),
        "hasSelection": doc.has_selection,
    });
    Ok(ToolOutput::data(
        format!(
            "{}: {}x{} {} at {} ppi.",
            doc.name, doc.width, doc.height, doc.mode, doc.resolution
        ),
        info,
    ))
}

fn layer_json(layer: &Layer) -> Value {
    let mut out = json!({
        "id": layer.id,
        "name": layer.name,
        "kind": layer.kind,
        "visible": layer.visible,
        "selected": layer.selected,
    });
    if !layer.children.is_empty() {
        out["layers"] = Value::Array(layer.children.iter().map(layer_json).collect());
    }
    out
}

pub fn get_layers(host: &mut dyn Host) -> Result<ToolOutput, BridgeError> {
    let doc = active_document(host)?;
    let layers: Vec<Value> = doc.layers.iter().map(layer_json).collect();
    Ok(ToolOutput::data(
        format!("{} layer(s) in {}.", doc.layer_count(), doc.name),
        Value::Array(layers),
    ))
}

pub fn list_tools(_host: &mut dyn Host) -> Result<ToolOutput, BridgeError> {
    let tools: Vec<Value> = registry()
        .iter()
        .map(|e| json!({ "name": e.info.name, "category": e.info.category.slug() }))
        .collect();
    Ok(ToolOutput::data(
        format!("{} tools.", tools.len()),
        Value::Array(tools),
    ))
}
