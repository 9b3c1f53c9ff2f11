#![allow(clippy::needless_pass_by_value)]

//! Generated-content tools. The host creates a new layer but does not always
//! report its id, so the created layer is recovered through the
//! [`CreatedLayerStrategy`] chain and renamed in the same scope.

use serde_json::json;

use crate::build::vocab::CONTENT_TYPE;
use crate::descriptor::{action, Batch, Descriptor, ObjectNode, RefChain};
use crate::error::BridgeError;
use crate::host::Host;
use crate::registry::params::{GenerateImageParams, GenerativeFillParams, LayerParams};
use crate::registry::validation::validate_text;
use crate::registry::ToolOutput;
use crate::resolve::CreatedLayerStrategy;
use crate::scope::{with_scope, Precondition};

use super::common::{on_layer, rename_created_layer, required_layer, select_all_node};

const SERVICE: &str = "clio";

/// Style options shared by both generative workflows.
fn advanced_options(content_type: &str) -> ObjectNode {
    let styles = ObjectNode::record()
        .with("text_to_image_content_type", CONTENT_TYPE.lookup(content_type))
        .with("text_to_image_effects_count", 0)
        .with("text_to_image_effects_list", vec!["none", "none", "none"]);
    ObjectNode::record().with("text_to_image_styles_options", styles)
}

/// Service parameters. `mode` is `ginp` for text-to-image and `tinp` for
/// in-painting.
fn service_options(prompt: &str, mode: &str, content_type: &str) -> ObjectNode {
    let clio = ObjectNode::new(SERVICE)
        .with("clio_advanced_options", advanced_options(content_type))
        .with("dualCrop", true)
        .with("gi_ADVANCED", r#"{"enable_mts":true}"#)
        .with("gi_CONTENT_PRESERVE", 0)
        .with("gi_CROP", false)
        .with("gi_DILATE", false)
        .with("gi_ENABLE_PROMPT_FILTER", true)
        .with("gi_GUIDANCE", 6)
        .with("gi_MODE", mode)
        .with("gi_NUM_STEPS", -1)
        .with("gi_PROMPT", prompt)
        .with("gi_SEED", -1)
        .with("gi_SIMILARITY", 0);
    ObjectNode::record().with(SERVICE, clio)
}

fn text_to_image(document_id: i64, prompt: &str, content_type: &str) -> ObjectNode {
    ObjectNode::new("syntheticTextToImage")
        .with_target(RefChain::ordinal("document"))
        .with("documentID", document_id)
        .with("layerID", 0)
        .with("prompt", prompt)
        .with("serviceID", SERVICE)
        .with(
            "serviceOptionsList",
            service_options(prompt, "ginp", content_type)
                .with("gentech_workflow_name", "text_to_image"),
        )
        .with("workflow", "text_to_image")
        .with(
            "workflowType",
            Descriptor::enumerated("genWorkflow", "text_to_image"),
        )
}

fn in_painting(document_id: i64, layer_id: i64, prompt: &str, content_type: &str) -> ObjectNode {
    let services = ObjectNode::record()
        .with("gen_harmonize", "clio3")
        .with("generate_background", "clio3")
        .with("generate_similar", "clio3")
        .with("generativeUpscale", "fal_aura_sr")
        .with("in_painting", "clio3")
        .with("instruct_edit", "clio3")
        .with("out_painting", "clio3")
        .with("text_to_image", "clio3");
    ObjectNode::new("syntheticFill")
        .with_target(RefChain::ordinal("document"))
        .with("documentID", document_id)
        .with("layerID", layer_id)
        .with("prompt", prompt)
        .with("serviceID", SERVICE)
        .with(
            "serviceOptionsList",
            service_options(prompt, "tinp", content_type),
        )
        .with("serviceVersion", "clio3")
        .with(
            "workflowType",
            Descriptor::enumerated("genWorkflow", "in_painting"),
        )
        .with("workflow_to_active_service_identifier_map", services)
}

fn created_output(verb: &str, name: &str, id: i64, strategy: CreatedLayerStrategy) -> ToolOutput {
    let mut message = format!("{verb} layer \"{name}\" (id {id}).");
    if !strategy.is_exact() {
        message.push_str(" The host did not report the new layer; it was identified heuristically.");
    }
    ToolOutput::data(
        message,
        json!({
            "layerId": id,
            "name": name,
            "strategy": strategy,
            "exact": strategy.is_exact(),
        }),
    )
}

/// Select all, generate, rasterize, then name whatever layer appeared.
pub fn generate_image(host: &mut dyn Host, p: GenerateImageParams) -> Result<ToolOutput, BridgeError> {
    validate_text(&p.prompt, "prompt")?;
    validate_text(&p.layer_name, "layerName")?;
    let (id, strategy) = with_scope(host, "generateImage", Some(Precondition::ActiveDocument), |s| {
        let document_id = s.document()?.id;
        s.submit(Batch::single(select_all_node()?))?;
        let results = s.submit(
            Batch::single(text_to_image(document_id, &p.prompt, &p.content_type))
                .with(action::on_target_layer("rasterizeLayer")),
        )?;
        rename_created_layer(s, &results, &p.layer_name)
    })?;
    Ok(created_output("Generated", &p.layer_name, id, strategy))
}

/// Fill the selection against `layerId` and name the result.
pub fn generative_fill(
    host: &mut dyn Host,
    p: GenerativeFillParams,
) -> Result<ToolOutput, BridgeError> {
    validate_text(&p.prompt, "prompt")?;
    validate_text(&p.layer_name, "layerName")?;
    let (id, strategy) = with_scope(host, "generativeFill", Some(Precondition::ActiveSelection), |s| {
        let layer_id = required_layer(s, &p.layer_id)?;
        let document_id = s.document()?.id;
        let results = s.submit(Batch::single(in_painting(
            document_id,
            layer_id,
            &p.prompt,
            &p.content_type,
        )))?;
        rename_created_layer(s, &results, &p.layer_name)
    })?;
    Ok(created_output("Filled", &p.layer_name, id, strategy))
}

pub fn remove_background(host: &mut dyn Host, p: LayerParams) -> Result<ToolOutput, BridgeError> {
    on_layer(
        host,
        "removeBackground",
        p.layer_id.as_ref(),
        action::event("removeBackground"),
    )?;
    Ok(ToolOutput::unit("Removed background."))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::super::fixtures::{host, host_with_selection, poster};
    use crate::error::ErrorKind;
    use crate::host::MemoryHost;
    use crate::model::{Layer, Workspace};
    use crate::registry::dispatch::{dispatch, Command};
    use serde_json::json;

    fn with_generated_layer(selection: bool, selected: bool) -> Workspace {
        let mut doc = poster();
        doc.has_selection = selection;
        let mut layer = Layer::new(9, "Layer 1");
        if selected {
            layer = layer.selected();
        }
        doc.layers.insert(0, layer);
        Workspace::single(doc)
    }

    #[test]
    fn generate_image_renames_reported_layer() {
        let mut h = host();
        h.respond(vec![]);
        h.respond(vec![json!({ "layerID": 9 }), json!({})]);
        h.after_next_submit(with_generated_layer(false, false));
        let out = dispatch(
            &mut h,
            &Command::new("generateImage", json!({ "prompt": "a red fox", "layerName": "Fox" })),
        )
        .unwrap();
        assert_eq!(out.data["layerId"], 9);
        assert_eq!(out.data["strategy"], "reported_id");
        assert_eq!(out.data["exact"], true);

        let sent = h.submitted_json();
        assert_eq!(sent[0][0]["to"]["_value"], "allEnum");
        assert_eq!(sent[1][0]["_obj"], "syntheticTextToImage");
        assert_eq!(sent[1][0]["serviceOptionsList"]["clio"]["gi_MODE"], "ginp");
        assert_eq!(sent[1][1]["_obj"], "rasterizeLayer");
        assert_eq!(sent[2][0]["_obj"], "select");
        assert_eq!(sent[2][0]["_target"][0]["_id"], 9);
        assert_eq!(sent[3][0]["to"]["name"], "Fox");
    }

    #[test]
    fn unreported_layer_falls_back_to_topmost() {
        let mut h = MemoryHost::new(with_generated_layer(false, false));
        let out = dispatch(
            &mut h,
            &Command::new("generateImage", json!({ "prompt": "hills", "layerName": "Hills" })),
        )
        .unwrap();
        assert_eq!(out.data["layerId"], 9);
        assert_eq!(out.data["strategy"], "topmost");
        assert_eq!(out.data["exact"], false);
        assert!(out.message.contains("heuristically"));
    }

    #[test]
    fn generative_fill_needs_selection_and_layer() {
        let mut h = host();
        let err = dispatch(
            &mut h,
            &Command::new(
                "generativeFill",
                json!({ "prompt": "clouds", "layerName": "Clouds", "layerId": "Sky" }),
            ),
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Precondition);

        let mut h = host_with_selection();
        let err = dispatch(
            &mut h,
            &Command::new(
                "generativeFill",
                json!({ "prompt": "clouds", "layerName": "Clouds", "layerId": "Nope" }),
            ),
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Resolution);
        assert!(h.submitted().is_empty());
    }

    #[test]
    fn generative_fill_prefers_selected_layer() {
        let mut h = MemoryHost::new(with_generated_layer(true, true));
        let out = dispatch(
            &mut h,
            &Command::new(
                "generativeFill",
                json!({ "prompt": "clouds", "layerName": "Clouds", "layerId": "Sky", "contentType": "Photo" }),
            ),
        )
        .unwrap();
        assert_eq!(out.data["strategy"], "selected");
        let sent = h.submitted_json();
        let fill = &sent[0][0];
        assert_eq!(fill["layerID"], 2);
        assert_eq!(fill["serviceOptionsList"]["clio"]["gi_MODE"], "tinp");
        assert_eq!(
            fill["serviceOptionsList"]["clio"]["clio_advanced_options"]["text_to_image_styles_options"]
                ["text_to_image_content_type"],
            "photo"
        );
    }

    #[test]
    fn empty_prompt_is_rejected() {
        let mut h = host();
        let err = dispatch(
            &mut h,
            &Command::new("generateImage", json!({ "prompt": "  ", "layerName": "x" })),
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn remove_background_selects_first() {
        let mut h = host();
        dispatch(&mut h, &Command::new("removeBackground", json!({ "layerId": 3 }))).unwrap();
        let sent = h.submitted_json();
        assert_eq!(sent[1][0], json!({ "_obj": "removeBackground" }));
    }
}
