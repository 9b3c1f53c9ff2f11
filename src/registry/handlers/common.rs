use serde_json::Value;
use tracing::info;

use crate::descriptor::{action, Batch, Descriptor, ObjectNode, RefChain};
use crate::error::BridgeError;
use crate::host::Host;
use crate::resolve::{resolve_created_layer, CreatedLayerStrategy, TargetRef};
use crate::scope::{with_scope, Precondition, Scope};

/// Select `layer` when given, then submit one node against the active layer.
pub fn on_layer(
    host: &mut dyn Host,
    tool: &str,
    layer: Option<&TargetRef>,
    node: ObjectNode,
) -> Result<Vec<Value>, BridgeError> {
    on_layer_batch(host, tool, layer, Batch::single(node))
}

pub fn on_layer_batch(
    host: &mut dyn Host,
    tool: &str,
    layer: Option<&TargetRef>,
    batch: Batch,
) -> Result<Vec<Value>, BridgeError> {
    with_scope(host, tool, Some(Precondition::ActiveDocument), |s| {
        s.target_layer(layer)?;
        s.submit(batch)
    })
}

/// Submit one batch under a precondition, no layer selection.
pub fn submit(
    host: &mut dyn Host,
    tool: &str,
    precondition: Precondition,
    batch: Batch,
) -> Result<Vec<Value>, BridgeError> {
    with_scope(host, tool, Some(precondition), |s| s.submit(batch))
}

/// Resolve a layer that must exist and return its host id.
pub fn required_layer(s: &Scope<'_>, target: &TargetRef) -> Result<i64, BridgeError> {
    let handle = s.resolve_layer(target)?;
    handle
        .id
        .ok_or_else(|| BridgeError::not_found(format!("Layer {target}")))
}

/// `set [{_ref: "channel", _property: "selection"}] to allEnum`
pub fn select_all_node() -> Result<ObjectNode, BridgeError> {
    Ok(action::set(
        selection_ref(),
        Descriptor::enumerated("ordinal", "allEnum"),
    )?)
}

pub fn selection_ref() -> RefChain {
    RefChain::property("channel", "selection")
}

/// Find the layer a generative batch created and give it `name`.
///
/// Refreshes the snapshot first. The strategy that found the layer is
/// returned so callers can report when the match was a guess.
pub fn rename_created_layer(
    s: &mut Scope<'_>,
    results: &[Value],
    name: &str,
) -> Result<(i64, CreatedLayerStrategy), BridgeError> {
    s.refresh()?;
    let (handle, strategy) = resolve_created_layer(s.document()?, results)
        .ok_or_else(|| BridgeError::not_found("Created layer"))?;
    let id = handle
        .id
        .ok_or_else(|| BridgeError::not_found("Created layer id"))?;
    s.select_layer(&handle)?;
    s.submit(Batch::single(action::set(
        RefChain::layer_id(id),
        ObjectNode::new("layer").with("name", name),
    )?))?;
    info!(layer = id, ?strategy, name, "renamed created layer");
    Ok((id, strategy))
}
