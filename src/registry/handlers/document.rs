#![allow(clippy::needless_pass_by_value)]

use crate::build::color::{background, foreground, rgb};
use crate::build::vocab::{anchor, ALIGNMENT, DOCUMENT_MODE, INTERPOLATION, TRIM_BASIS};
use crate::descriptor::{action, Batch, Descriptor, ObjectNode, RefChain, RefForm, RefSegment, UnitValue};
use crate::error::BridgeError;
use crate::host::Host;
use crate::model::RgbColor;
use crate::registry::params::{
    AlignContentParams, ColorParams, CreateDocumentParams, DuplicateDocumentParams, LayerParams,
    RenameLayerParams,
    ResizeCanvasParams, ResizeImageParams, RotateCanvasParams, SetActiveDocumentParams,
    TrimDocumentParams, VisibilityParams,
};
use crate::registry::validation::{validate_positive, validate_range, validate_text};
use crate::registry::ToolOutput;
use crate::resolve::TargetKind;
use crate::scope::{with_scope, Precondition};

use super::common::{on_layer, required_layer, submit};

pub fn set_active_document(
    host: &mut dyn Host,
    p: SetActiveDocumentParams,
) -> Result<ToolOutput, BridgeError> {
    let handle = with_scope(host, "setActiveDocument", None, |s| {
        let handle = s.resolve(TargetKind::Document, &p.document_id)?;
        let id = handle
            .id
            .ok_or_else(|| BridgeError::not_found(format!("Document {}", p.document_id)))?;
        s.submit(Batch::single(action::select(RefChain::new(vec![
            RefSegment::new("document", RefForm::Id(id)),
        ]))))?;
        Ok(handle)
    })?;
    Ok(ToolOutput::data(
        format!("Activated document \"{}\".", handle.name),
        serde_json::json!({ "id": handle.id, "name": handle.name }),
    ))
}

/// New document filled with `fillColor`. Its background is converted to an
/// ordinary layer, still named "Background", in the same batch. Needs no open
/// document.
pub fn create_document(
    host: &mut dyn Host,
    p: CreateDocumentParams,
) -> Result<ToolOutput, BridgeError> {
    validate_text(&p.name, "name")?;
    validate_range(p.width, 1.0, 300_000.0, "width")?;
    validate_range(p.height, 1.0, 300_000.0, "height")?;
    validate_range(p.resolution, 1.0, 10_000.0, "resolution")?;
    let document = ObjectNode::new("document")
        .with("name", p.name.as_str())
        .with("artboard", false)
        .with("autoPromoteBackgroundLayer", false)
        .with("mode", Descriptor::class(DOCUMENT_MODE.lookup(&p.color_mode)))
        .with("width", UnitValue::pixels(p.width))
        .with("height", UnitValue::pixels(p.height))
        .with("resolution", UnitValue::density(p.resolution))
        .with("pixelScaleFactor", 1)
        .with("fill", Descriptor::enumerated("fill", "color"))
        .with("fillColor", rgb(p.fill_color))
        .with("depth", 8)
        .with("profile", "sRGB IEC61966-2.1");
    let unlock = action::set(
        RefChain::property("layer", "background"),
        ObjectNode::new("layer").with("name", "Background"),
    )?;
    let batch = Batch::single(action::event("make").with("new", document)).with(unlock);
    with_scope(host, "createDocument", None, |s| s.submit(batch))?;
    Ok(ToolOutput::unit(format!(
        "Created {}x{} document \"{}\".",
        p.width, p.height, p.name
    )))
}

pub fn duplicate_document(
    host: &mut dyn Host,
    p: DuplicateDocumentParams,
) -> Result<ToolOutput, BridgeError> {
    validate_text(&p.name, "name")?;
    let node = ObjectNode::new("duplicate")
        .with_target(RefChain::ordinal("document"))
        .with("name", p.name.as_str());
    submit(host, "duplicateDocument", Precondition::ActiveDocument, Batch::single(node))?;
    Ok(ToolOutput::unit(format!("Duplicated document as \"{}\".", p.name)))
}

pub fn save_document(host: &mut dyn Host) -> Result<ToolOutput, BridgeError> {
    submit(
        host,
        "saveDocument",
        Precondition::ActiveDocument,
        Batch::single(action::event("save")),
    )?;
    Ok(ToolOutput::unit("Saved document."))
}

pub fn crop_document(host: &mut dyn Host) -> Result<ToolOutput, BridgeError> {
    submit(
        host,
        "cropDocument",
        Precondition::ActiveSelection,
        Batch::single(action::event("crop").with("delete", true)),
    )?;
    Ok(ToolOutput::unit("Cropped document to the selection."))
}

/// Zero or absent dimensions are left to the host.
pub fn resize_image(host: &mut dyn Host, p: ResizeImageParams) -> Result<ToolOutput, BridgeError> {
    let positive = |v: Option<f64>, name: &str| -> Result<Option<f64>, BridgeError> {
        match v {
            Some(v) if v != 0.0 => validate_positive(v, name).map(|()| Some(v)),
            _ => Ok(None),
        }
    };
    let width = positive(p.width, "width")?;
    let height = positive(p.height, "height")?;
    let resolution = positive(p.resolution, "resolution")?;
    if width.is_none() && height.is_none() && resolution.is_none() {
        return Err(BridgeError::validation(
            "resizeImage needs a width, height or resolution",
        ));
    }

    let node = ObjectNode::new("imageSize")
        .with("constrainProportions", p.constrain)
        .with("interfaceIconFrameDimmed", INTERPOLATION.node(&p.interpolation))
        .with_opt("width", width.map(UnitValue::pixels))
        .with_opt("height", height.map(UnitValue::pixels))
        .with_opt("resolution", resolution.map(UnitValue::density));
    submit(host, "resizeImage", Precondition::ActiveDocument, Batch::single(node))?;

    let dims = [("width", width), ("height", height), ("resolution", resolution)]
        .iter()
        .filter_map(|(n, v)| v.map(|v| format!("{n} {v}")))
        .collect::<Vec<_>>()
        .join(", ");
    Ok(ToolOutput::unit(format!("Resized image: {dims}.")))
}

pub fn resize_canvas(host: &mut dyn Host, p: ResizeCanvasParams) -> Result<ToolOutput, BridgeError> {
    validate_positive(p.width, "width")?;
    validate_positive(p.height, "height")?;
    let (horizontal, vertical) = anchor(&p.anchor);
    let mut node = ObjectNode::new("canvasSize")
        .with("width", UnitValue::pixels(p.width))
        .with("height", UnitValue::pixels(p.height))
        .with("horizontal", horizontal)
        .with("vertical", vertical);
    if let Some(color) = p.color {
        node.insert(
            "canvasExtensionColorType",
            Descriptor::enumerated("canvasExtensionColorType", "color"),
        );
        node.insert("canvasExtensionColor", rgb(color));
    }
    submit(host, "resizeCanvas", Precondition::ActiveDocument, Batch::single(node))?;
    Ok(ToolOutput::unit(format!(
        "Resized canvas to {}x{} anchored {}.",
        p.width, p.height, p.anchor
    )))
}

pub fn rotate_canvas(host: &mut dyn Host, p: RotateCanvasParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.angle, -360.0, 360.0, "angle")?;
    let node = ObjectNode::new("rotateEventEnum")
        .with_target(RefChain::ordinal("document"))
        .with("angle", UnitValue::angle(p.angle));
    submit(host, "rotateCanvas", Precondition::ActiveDocument, Batch::single(node))?;
    Ok(ToolOutput::unit(format!("Rotated canvas {}°.", p.angle)))
}

pub fn trim_document(host: &mut dyn Host, p: TrimDocumentParams) -> Result<ToolOutput, BridgeError> {
    let node = ObjectNode::new("trim")
        .with("trimBasedOn", TRIM_BASIS.node(&p.trim_type))
        .with("top", p.top)
        .with("bottom", p.bottom)
        .with("left", p.left)
        .with("right", p.right);
    submit(host, "trimDocument", Precondition::ActiveDocument, Batch::single(node))?;
    Ok(ToolOutput::unit("Trimmed document."))
}

pub fn reveal_all(host: &mut dyn Host) -> Result<ToolOutput, BridgeError> {
    submit(
        host,
        "revealAll",
        Precondition::ActiveDocument,
        Batch::single(action::event("revealAll")),
    )?;
    Ok(ToolOutput::unit("Revealed all layer content."))
}

pub fn merge_visible(host: &mut dyn Host) -> Result<ToolOutput, BridgeError> {
    submit(
        host,
        "mergeVisible",
        Precondition::ActiveDocument,
        Batch::single(action::event("mergeVisible")),
    )?;
    Ok(ToolOutput::unit("Merged visible layers."))
}

pub fn stamp_visible(host: &mut dyn Host) -> Result<ToolOutput, BridgeError> {
    submit(
        host,
        "stampVisible",
        Precondition::ActiveDocument,
        Batch::single(action::event("mergeVisible").with("duplicate", true)),
    )?;
    Ok(ToolOutput::unit("Stamped visible layers onto a new layer."))
}

pub fn merge_down(host: &mut dyn Host, p: LayerParams) -> Result<ToolOutput, BridgeError> {
    on_layer(host, "mergeDown", p.layer_id.as_ref(), action::event("mergeLayersNew"))?;
    Ok(ToolOutput::unit("Merged layer down."))
}

pub fn align_content(host: &mut dyn Host, p: AlignContentParams) -> Result<ToolOutput, BridgeError> {
    with_scope(host, "alignContent", Some(Precondition::ActiveSelection), |s| {
        s.target_layer(p.layer_id.as_ref())?;
        s.submit(Batch::single(
            action::on_target_layer("align")
                .with("using", ALIGNMENT.node(&p.alignment_mode))
                .with("alignToCanvas", false),
        ))
    })?;
    Ok(ToolOutput::unit(format!(
        "Aligned layer to selection ({}).",
        p.alignment_mode
    )))
}

fn set_color(
    host: &mut dyn Host,
    tool: &str,
    target: RefChain,
    color: RgbColor,
) -> Result<(), BridgeError> {
    let node = action::set(target, rgb(color))?;
    with_scope(host, tool, None, |s| s.submit(Batch::single(node)))?;
    Ok(())
}

pub fn set_foreground_color(host: &mut dyn Host, p: ColorParams) -> Result<ToolOutput, BridgeError> {
    let color = p.color.unwrap_or(RgbColor::BLACK);
    set_color(host, "setForegroundColor", foreground(), color)?;
    Ok(ToolOutput::unit(format!("Foreground color set to {}.", color.to_hex())))
}

pub fn set_background_color(host: &mut dyn Host, p: ColorParams) -> Result<ToolOutput, BridgeError> {
    let color = p.color.unwrap_or(RgbColor::WHITE);
    set_color(host, "setBackgroundColor", background(), color)?;
    Ok(ToolOutput::unit(format!("Background color set to {}.", color.to_hex())))
}

pub fn swap_colors(host: &mut dyn Host) -> Result<ToolOutput, BridgeError> {
    let node = action::event("exchange").with_target(RefChain::property("color", "colors"));
    with_scope(host, "swapColors", None, |s| s.submit(Batch::single(node)))?;
    Ok(ToolOutput::unit("Swapped foreground and background colors."))
}

pub fn rename_layer(host: &mut dyn Host, p: RenameLayerParams) -> Result<ToolOutput, BridgeError> {
    validate_text(&p.name, "name")?;
    with_scope(host, "renameLayer", Some(Precondition::ActiveDocument), |s| {
        let id = required_layer(s, &p.layer_id)?;
        s.submit(Batch::single(action::set(
            RefChain::layer_id(id),
            ObjectNode::new("layer").with("name", p.name.as_str()),
        )?))
    })?;
    Ok(ToolOutput::unit(format!("Renamed layer {} to \"{}\".", p.layer_id, p.name)))
}

pub fn delete_layer(host: &mut dyn Host, p: LayerParams) -> Result<ToolOutput, BridgeError> {
    with_scope(host, "deleteLayer", Some(Precondition::ActiveDocument), |s| {
        let target = match &p.layer_id {
            Some(layer) => RefChain::layer_id(required_layer(s, layer)?),
            None => RefChain::target_layer(),
        };
        s.submit(Batch::single(action::event("delete").with_target(target)))
    })?;
    Ok(ToolOutput::unit(match &p.layer_id {
        Some(layer) => format!("Deleted layer {layer}."),
        None => "Deleted the active layer.".to_string(),
    }))
}

pub fn set_layer_visibility(
    host: &mut dyn Host,
    p: VisibilityParams,
) -> Result<ToolOutput, BridgeError> {
    let verb = if p.visible { "show" } else { "hide" };
    with_scope(host, "setLayerVisibility", Some(Precondition::ActiveDocument), |s| {
        let id = required_layer(s, &p.layer_id)?;
        s.submit(Batch::single(
            action::event(verb).with("null", RefChain::layer_id(id)),
        ))
    })?;
    Ok(ToolOutput::unit(format!(
        "Layer {} is now {}.",
        p.layer_id,
        if p.visible { "visible" } else { "hidden" }
    )))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::super::fixtures::{host, host_with_selection, run};
    use crate::error::ErrorKind;
    use crate::host::MemoryHost;
    use crate::model::{Document, Workspace};
    use serde_json::json;

    #[test]
    fn create_document_needs_no_open_document() {
        let mut h = MemoryHost::new(Workspace::default());
        run(
            &mut h,
            "createDocument",
            json!({
                "name": "Flyer",
                "width": 1200,
                "height": 1800,
                "resolution": 300,
                "fillColor": { "red": 255, "green": 255, "blue": 255 },
                "colorMode": "cmyk"
            }),
        )
        .unwrap();
        let sent = h.submitted_json();
        assert_eq!(sent.as_array().unwrap().len(), 1);
        let make = &sent[0][0];
        assert_eq!(make["_obj"], "make");
        let doc = &make["new"];
        assert_eq!(doc["_obj"], "document");
        assert_eq!(doc["name"], "Flyer");
        assert_eq!(doc["mode"], json!({ "_class": "CMYKColorMode" }));
        assert_eq!(doc["width"], json!({ "_unit": "pixelsUnit", "_value": 1200.0 }));
        assert_eq!(doc["resolution"], json!({ "_unit": "densityUnit", "_value": 300.0 }));
        assert_eq!(doc["fill"]["_value"], "color");
        assert_eq!(doc["fillColor"]["grain"], 255);

        let unlock = &sent[0][1];
        assert_eq!(unlock["_target"][0], json!({ "_ref": "layer", "_property": "background" }));
        assert_eq!(unlock["to"], json!({ "_obj": "layer", "name": "Background" }));
    }

    #[test]
    fn create_document_defaults_and_limits() {
        let mut h = host();
        run(&mut h, "createDocument", json!({ "width": 640, "height": 480 })).unwrap();
        let doc = &h.submitted_json()[0][0]["new"];
        assert_eq!(doc["name"], "Untitled-1");
        assert_eq!(doc["mode"]["_class"], "RGBColorMode");
        assert_eq!(doc["resolution"]["_value"], 72.0);
        assert_eq!(doc["fillColor"]["red"], 0);

        let err = run(&mut h, "createDocument", json!({ "width": 0, "height": 480 })).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        let err = run(&mut h, "createDocument", json!({ "height": 480 })).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn set_active_document_selects_by_id() {
        let mut ws = Workspace::single(super::super::fixtures::poster());
        ws.documents.push(Document::new(9, "Banner"));
        let mut h = MemoryHost::new(ws);
        let sent = run(&mut h, "setActiveDocument", json!({ "documentId": "Banner" })).unwrap();
        assert_eq!(sent[0][0]["_obj"], "select");
        assert_eq!(sent[0][0]["_target"][0], json!({ "_ref": "document", "_id": 9 }));

        let err = run(&mut h, "setActiveDocument", json!({ "documentId": 77 })).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Resolution);
    }

    #[test]
    fn resize_image_omits_unset_dimensions() {
        let mut h = host();
        let sent = run(&mut h, "resizeImage", json!({ "width": 400, "height": 0 })).unwrap();
        let node = &sent[0][0];
        assert_eq!(node["_obj"], "imageSize");
        assert_eq!(node["width"]["_unit"], "pixelsUnit");
        assert!(node.get("height").is_none());
        assert_eq!(node["interfaceIconFrameDimmed"]["_value"], "bicubicAutomatic");
        assert_eq!(node["constrainProportions"], true);

        let err = run(&mut h, "resizeImage", json!({})).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn resize_canvas_splits_anchor() {
        let mut h = host();
        let sent = run(
            &mut h,
            "resizeCanvas",
            json!({ "width": 1000, "height": 800, "anchor": "TOPLEFT", "color": { "red": 0, "green": 0, "blue": 0 } }),
        )
        .unwrap();
        let node = &sent[0][0];
        assert_eq!(node["horizontal"], json!({ "_enum": "horizontalLocation", "_value": "left" }));
        assert_eq!(node["vertical"]["_value"], "top");
        assert_eq!(node["canvasExtensionColor"]["_obj"], "RGBColor");
    }

    #[test]
    fn crop_requires_selection() {
        let mut h = host();
        let err = run(&mut h, "cropDocument", json!({})).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Precondition);
        assert!(h.submitted().is_empty());

        let mut h = host_with_selection();
        let sent = run(&mut h, "cropDocument", json!({})).unwrap();
        assert_eq!(sent[0][0], json!({ "_obj": "crop", "delete": true }));
    }

    #[test]
    fn rotate_canvas_defaults_to_ninety() {
        let mut h = host();
        let sent = run(&mut h, "rotateCanvas", json!({})).unwrap();
        assert_eq!(sent[0][0]["angle"], json!({ "_unit": "angleUnit", "_value": 90.0 }));
        assert_eq!(sent[0][0]["_target"][0]["_ref"], "document");
    }

    #[test]
    fn colors_are_set_with_grain() {
        let mut h = host();
        let sent = run(&mut h, "setBackgroundColor", json!({})).unwrap();
        assert_eq!(sent[0][0]["_target"][0]["_property"], "backgroundColor");
        assert_eq!(sent[0][0]["to"]["grain"], 255);

        run(&mut h, "swapColors", json!({})).unwrap();
        assert_eq!(h.submitted_json()[1][0]["_obj"], "exchange");
    }

    #[test]
    fn rename_resolves_by_name() {
        let mut h = host();
        let sent = run(&mut h, "renameLayer", json!({ "layerId": "Sky", "name": "Clouds" })).unwrap();
        assert_eq!(sent[0][0]["_target"][0]["_id"], 2);
        assert_eq!(sent[0][0]["to"], json!({ "_obj": "layer", "name": "Clouds" }));
    }

    #[test]
    fn visibility_uses_show_and_hide() {
        let mut h = host();
        let sent = run(&mut h, "setLayerVisibility", json!({ "layerId": 3, "visible": false })).unwrap();
        assert_eq!(sent[0][0]["_obj"], "hide");
        assert_eq!(sent[0][0]["null"][0]["_id"], 3);
    }

    #[test]
    fn delete_without_layer_targets_the_active_one() {
        let mut h = host();
        let sent = run(&mut h, "deleteLayer", json!({})).unwrap();
        assert_eq!(sent[0][0]["_target"][0]["_value"], "targetEnum");

        let err = run(&mut h, "deleteLayer", json!({ "layerId": 42 })).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Resolution);
        assert_eq!(h.submitted().len(), 1);
    }

    #[test]
    fn merge_down_selects_first() {
        let mut h = host();
        let sent = run(&mut h, "mergeDown", json!({ "layerId": 3 })).unwrap();
        assert_eq!(sent[0][0]["_obj"], "select");
        assert_eq!(sent[1][0]["_obj"], "mergeLayersNew");
    }

    #[test]
    fn stamp_duplicates() {
        let mut h = host();
        let sent = run(&mut h, "stampVisible", json!({})).unwrap();
        assert_eq!(sent[0][0], json!({ "_obj": "mergeVisible", "duplicate": true }));
    }
}
