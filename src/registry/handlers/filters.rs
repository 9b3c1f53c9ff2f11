#![allow(clippy::needless_pass_by_value)]

//! Destructive filters on a layer. Each is a single root node run against
//! the active layer after the optional `layerId` select.

use crate::build::vocab::{
    NOISE_DISTRIBUTION, RADIAL_BLUR_METHOD, RADIAL_BLUR_QUALITY, SHARPEN_REMOVE, ZIGZAG_STYLE,
};
use crate::descriptor::{Descriptor, ObjectNode, UnitValue};
use crate::error::BridgeError;
use crate::host::Host;
use crate::registry::params::{
    ColorHalftoneParams, CrystallizeParams, DustAndScratchesParams, EmbossParams,
    GaussianBlurParams, HighPassParams, LayerParams, LensBlurParams, MedianParams,
    MotionBlurParams, NoiseParams, OilPaintParams, PixelateParams, PosterizeParams,
    RadialBlurParams, SmartSharpenParams, SurfaceBlurParams, TwirlParams, UnsharpMaskParams,
    ZigZagParams,
};
use crate::registry::validation::{validate_count, validate_positive, validate_range};
use crate::registry::ToolOutput;
use crate::resolve::TargetRef;

use super::common::on_layer;

fn apply(
    host: &mut dyn Host,
    tool: &str,
    layer: Option<&TargetRef>,
    node: ObjectNode,
) -> Result<(), BridgeError> {
    on_layer(host, tool, layer, node)?;
    Ok(())
}

pub fn gaussian_blur(host: &mut dyn Host, p: GaussianBlurParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.radius, 0.1, 1000.0, "radius")?;
    let node = ObjectNode::new("gaussianBlur").with("radius", UnitValue::pixels(p.radius));
    apply(host, "applyGaussianBlur", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit(format!("Applied {}px gaussian blur.", p.radius)))
}

pub fn motion_blur(host: &mut dyn Host, p: MotionBlurParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.angle, -360.0, 360.0, "angle")?;
    validate_range(p.distance, 1.0, 2000.0, "distance")?;
    let node = ObjectNode::new("motionBlur")
        .with("angle", p.angle)
        .with("distance", UnitValue::pixels(p.distance));
    apply(host, "applyMotionBlur", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit(format!(
        "Applied {}px motion blur at {}°.",
        p.distance, p.angle
    )))
}

pub fn noise(host: &mut dyn Host, p: NoiseParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.amount, 0.1, 400.0, "amount")?;
    let node = ObjectNode::new("addNoise")
        .with("distort", NOISE_DISTRIBUTION.node(&p.distribution))
        .with("noise", UnitValue::percent(p.amount))
        .with("monochromatic", p.monochromatic);
    apply(host, "applyNoise", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit(format!("Added {}% noise.", p.amount)))
}

pub fn sharpen(host: &mut dyn Host, p: LayerParams) -> Result<ToolOutput, BridgeError> {
    apply(host, "applySharpen", p.layer_id.as_ref(), ObjectNode::new("sharpen"))?;
    Ok(ToolOutput::unit("Sharpened."))
}

pub fn unsharp_mask(host: &mut dyn Host, p: UnsharpMaskParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.amount, 1.0, 500.0, "amount")?;
    validate_range(p.radius, 0.1, 1000.0, "radius")?;
    validate_range(p.threshold, 0.0, 255.0, "threshold")?;
    let node = ObjectNode::new("unsharpMask")
        .with("amount", p.amount)
        .with("radius", UnitValue::pixels(p.radius))
        .with("threshold", p.threshold);
    apply(host, "applyUnsharpMask", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit("Applied unsharp mask."))
}

pub fn high_pass(host: &mut dyn Host, p: HighPassParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.radius, 0.1, 1000.0, "radius")?;
    let node = ObjectNode::new("highPass").with("radius", UnitValue::pixels(p.radius));
    apply(host, "applyHighPass", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit(format!("Applied {}px high pass.", p.radius)))
}

pub fn radial_blur(host: &mut dyn Host, p: RadialBlurParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.amount, 1.0, 100.0, "amount")?;
    let node = ObjectNode::new("radialBlur")
        .with("amount", p.amount)
        .with("blurMethod", RADIAL_BLUR_METHOD.node(&p.method))
        .with("blurQuality", RADIAL_BLUR_QUALITY.node(&p.quality));
    apply(host, "applyRadialBlur", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit(format!(
        "Applied {} radial blur.",
        RADIAL_BLUR_METHOD.lookup(&p.method)
    )))
}

pub fn surface_blur(host: &mut dyn Host, p: SurfaceBlurParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.radius, 1.0, 100.0, "radius")?;
    validate_range(p.threshold, 2.0, 255.0, "threshold")?;
    let node = ObjectNode::new("surfaceBlur")
        .with("radius", p.radius)
        .with("threshold", p.threshold);
    apply(host, "applySurfaceBlur", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit("Applied surface blur."))
}

/// No depth map, focal distance 0, no noise. The distribution is always
/// `uniform`, which is not the `uniformDistribution` value addNoise uses.
pub fn lens_blur(host: &mut dyn Host, p: LensBlurParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.radius, 0.0, 100.0, "radius")?;
    validate_range(p.brightness, 0.0, 100.0, "brightness")?;
    validate_range(p.threshold, 0.0, 255.0, "threshold")?;
    let node = ObjectNode::new("lensBlur")
        .with("source", Descriptor::enumerated("depthMapSource", "none"))
        .with("focalDistance", 0)
        .with("radius", p.radius)
        .with("brightness", p.brightness)
        .with("threshold", p.threshold)
        .with("noiseAmount", 0)
        .with("distribution", Descriptor::enumerated("distribution", "uniform"));
    apply(host, "applyLensBlur", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit("Applied lens blur."))
}

pub fn smart_sharpen(host: &mut dyn Host, p: SmartSharpenParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.amount, 1.0, 500.0, "amount")?;
    validate_range(p.radius, 0.1, 64.0, "radius")?;
    validate_range(p.noise_reduction, 0.0, 100.0, "noiseReduction")?;
    let node = ObjectNode::new("smartSharpen")
        .with("amount", p.amount)
        .with("radius", UnitValue::pixels(p.radius))
        .with("noiseReduction", p.noise_reduction)
        .with("remove", SHARPEN_REMOVE.node(&p.remove_type));
    apply(host, "applySmartSharpen", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit("Applied smart sharpen."))
}

pub fn emboss(host: &mut dyn Host, p: EmbossParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.angle, -360.0, 360.0, "angle")?;
    validate_range(p.height, 1.0, 100.0, "height")?;
    validate_range(p.amount, 1.0, 500.0, "amount")?;
    let node = ObjectNode::new("emboss")
        .with("angle", p.angle)
        .with("height", p.height)
        .with("amount", UnitValue::percent(p.amount));
    apply(host, "applyEmboss", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit("Embossed."))
}

pub fn find_edges(host: &mut dyn Host, p: LayerParams) -> Result<ToolOutput, BridgeError> {
    apply(host, "applyFindEdges", p.layer_id.as_ref(), ObjectNode::new("findEdges"))?;
    Ok(ToolOutput::unit("Found edges."))
}

pub fn pixelate(host: &mut dyn Host, p: PixelateParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.cell_size, 2.0, 200.0, "cellSize")?;
    let node = ObjectNode::new("mosaic").with("cellSize", UnitValue::pixels(p.cell_size));
    apply(host, "applyPixelate", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit(format!("Pixelated with {}px cells.", p.cell_size)))
}

pub fn crystallize(host: &mut dyn Host, p: CrystallizeParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.cell_size, 3.0, 300.0, "cellSize")?;
    let node = ObjectNode::new("crystallize").with("cellSize", p.cell_size);
    apply(host, "applyCrystallize", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit("Crystallized."))
}

pub fn twirl(host: &mut dyn Host, p: TwirlParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.angle, -999.0, 999.0, "angle")?;
    let node = ObjectNode::new("twirl").with("angle", p.angle);
    apply(host, "applyTwirlDistortion", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit(format!("Twirled {}°.", p.angle)))
}

pub fn zig_zag(host: &mut dyn Host, p: ZigZagParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.amount, -100.0, 100.0, "amount")?;
    validate_range(p.ridges, 0.0, 20.0, "ridges")?;
    let node = ObjectNode::new("zigZag")
        .with("amount", p.amount)
        .with("ridges", p.ridges)
        .with("style", ZIGZAG_STYLE.node(&p.style));
    apply(host, "applyZigZagDistortion", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit("Applied zig-zag."))
}

pub fn solarize(host: &mut dyn Host, p: LayerParams) -> Result<ToolOutput, BridgeError> {
    apply(host, "applySolarize", p.layer_id.as_ref(), ObjectNode::new("solarize"))?;
    Ok(ToolOutput::unit("Solarized."))
}

pub fn posterize(host: &mut dyn Host, p: PosterizeParams) -> Result<ToolOutput, BridgeError> {
    validate_count(p.levels, 2, 255, "levels")?;
    let node = ObjectNode::new("posterize").with("levels", p.levels);
    apply(host, "applyPosterize", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit(format!("Posterized to {} levels.", p.levels)))
}

pub fn despeckle(host: &mut dyn Host, p: LayerParams) -> Result<ToolOutput, BridgeError> {
    apply(host, "applyDespeckle", p.layer_id.as_ref(), ObjectNode::new("despeckle"))?;
    Ok(ToolOutput::unit("Despeckled."))
}

pub fn median(host: &mut dyn Host, p: MedianParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.radius, 1.0, 500.0, "radius")?;
    let node = ObjectNode::new("median").with("radius", UnitValue::pixels(p.radius));
    apply(host, "applyMedianNoise", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit(format!("Applied {}px median.", p.radius)))
}

pub fn dust_and_scratches(
    host: &mut dyn Host,
    p: DustAndScratchesParams,
) -> Result<ToolOutput, BridgeError> {
    validate_positive(p.radius, "radius")?;
    validate_range(p.threshold, 0.0, 255.0, "threshold")?;
    let node = ObjectNode::new("dustAndScratches")
        .with("radius", p.radius)
        .with("threshold", p.threshold);
    apply(host, "applyDustAndScratches", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit("Applied dust & scratches."))
}

/// Oil paint runs through the filter gallery (`GEfc`).
pub fn oil_paint(host: &mut dyn Host, p: OilPaintParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.stylization, 0.1, 10.0, "stylization")?;
    validate_range(p.cleanliness, 0.0, 10.0, "cleanliness")?;
    validate_range(p.scale, 0.1, 10.0, "scale")?;
    validate_range(p.bristle_detail, 0.0, 10.0, "bristleDetail")?;
    validate_range(p.light_direction, -180.0, 180.0, "lightDirection")?;
    validate_range(p.shine, 0.0, 10.0, "shine")?;
    let paint = ObjectNode::new("paintOil")
        .with("lightingOn", p.lighting)
        .with("stylization", p.stylization)
        .with("cleanliness", p.cleanliness)
        .with("brushScale", p.scale)
        .with("bristleDetail", p.bristle_detail)
        .with("angularDirection", p.light_direction)
        .with("shininess", p.shine);
    let node = ObjectNode::new("GEfc").with("oilPaint", paint);
    apply(host, "applyOilPaint", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit("Applied oil paint."))
}

pub fn color_halftone(host: &mut dyn Host, p: ColorHalftoneParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.max_radius, 4.0, 127.0, "maxRadius")?;
    let angles = [
        ("angle1", p.angle1),
        ("angle2", p.angle2),
        ("angle3", p.angle3),
        ("angle4", p.angle4),
    ];
    let mut node = ObjectNode::new("colorHalftone").with("maxRadius", p.max_radius);
    for (name, angle) in angles {
        validate_range(angle, -360.0, 360.0, name)?;
        node.insert(name, angle);
    }
    apply(host, "applyColorHalftone", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit(format!(
        "Applied color halftone with {}px dots.",
        p.max_radius
    )))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::super::fixtures::{host, last_node, run};
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn gaussian_blur_radius_in_pixels() {
        let mut h = host();
        let sent = run(&mut h, "applyGaussianBlur", json!({ "radius": 4 })).unwrap();
        assert_eq!(sent.as_array().unwrap().len(), 1);
        assert_eq!(
            sent[0][0],
            json!({ "_obj": "gaussianBlur", "radius": { "_unit": "pixelsUnit", "_value": 4.0 } })
        );
    }

    #[test]
    fn layer_is_selected_before_filter() {
        let mut h = host();
        let sent = run(&mut h, "applyMedianNoise", json!({ "layerId": 2 })).unwrap();
        assert_eq!(sent[0][0]["_obj"], "select");
        assert_eq!(sent[0][0]["_target"][0]["_id"], 2);
        assert_eq!(sent[1][0]["_obj"], "median");
    }

    #[test]
    fn out_of_range_radius_submits_nothing() {
        let mut h = host();
        let err = run(&mut h, "applyGaussianBlur", json!({ "radius": 5000 })).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("radius"));
        assert!(h.submitted().is_empty());
    }

    #[test]
    fn noise_distribution_maps_and_falls_back() {
        let mut h = host();
        run(&mut h, "applyNoise", json!({ "distribution": "Uniform" })).unwrap();
        let node = last_node(&h);
        assert_eq!(node["distort"], json!({ "_enum": "distribution", "_value": "uniformDistribution" }));
        assert_eq!(node["noise"]["_value"], 5.0);
        assert_eq!(node["monochromatic"], true);

        run(&mut h, "applyNoise", json!({ "distribution": "speckled" })).unwrap();
        assert_eq!(last_node(&h)["distort"]["_value"], "gaussianDistribution");
    }

    #[test]
    fn noise_is_registered_as_apply_noise() {
        let mut h = host();
        run(&mut h, "applyNoise", json!({ "amount": 10 })).unwrap();
        assert_eq!(last_node(&h)["_obj"], "addNoise");
        assert_eq!(last_node(&h)["noise"]["_value"], 10.0);

        let err = run(&mut h, "applyAddNoise", json!({ "amount": 10 })).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownTool);
    }

    #[test]
    fn oil_paint_goes_through_the_gallery() {
        let mut h = host();
        run(&mut h, "applyOilPaint", json!({ "layerId": "Sky", "lighting": false })).unwrap();
        let sent = h.submitted_json();
        assert_eq!(sent[0][0]["_obj"], "select");
        let node = &sent[1][0];
        assert_eq!(node["_obj"], "GEfc");
        let paint = &node["oilPaint"];
        assert_eq!(paint["_obj"], "paintOil");
        assert_eq!(paint["lightingOn"], false);
        assert_eq!(paint["stylization"], 4.0);
        assert_eq!(paint["brushScale"], 0.5);
        assert_eq!(paint["shininess"], 0.5);

        let err = run(&mut h, "applyOilPaint", json!({ "stylization": 0 })).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn color_halftone_keeps_channel_angle_order() {
        let mut h = host();
        run(&mut h, "applyColorHalftone", json!({ "angle2": 30 })).unwrap();
        let node = last_node(&h);
        let keys: Vec<&String> = node.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["_obj", "maxRadius", "angle1", "angle2", "angle3", "angle4"]);
        assert_eq!(node["maxRadius"], 8.0);
        assert_eq!(node["angle1"], 108.0);
        assert_eq!(node["angle2"], 30.0);
        assert_eq!(node["angle4"], 45.0);

        let err = run(&mut h, "applyColorHalftone", json!({ "maxRadius": 2 })).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("maxRadius"));
    }

    #[test]
    fn lens_blur_uses_literal_uniform() {
        let mut h = host();
        run(&mut h, "applyLensBlur", json!({})).unwrap();
        let node = last_node(&h);
        assert_eq!(node["distribution"]["_value"], "uniform");
        assert_eq!(node["source"]["_value"], "none");
        assert_eq!(node["radius"], 15.0);
    }

    #[test]
    fn radial_blur_and_smart_sharpen_enums() {
        let mut h = host();
        run(&mut h, "applyRadialBlur", json!({ "method": "zoom", "quality": "best" })).unwrap();
        let node = last_node(&h);
        assert_eq!(node["blurMethod"]["_value"], "zoom");
        assert_eq!(node["blurQuality"]["_value"], "best");

        run(&mut h, "applySmartSharpen", json!({ "removeType": "motionBlur" })).unwrap();
        assert_eq!(
            last_node(&h)["remove"],
            json!({ "_enum": "removeType", "_value": "motionBlur" })
        );
    }

    #[test]
    fn parameterless_filters() {
        let mut h = host();
        for (tool, obj) in [
            ("applySharpen", "sharpen"),
            ("applyFindEdges", "findEdges"),
            ("applySolarize", "solarize"),
            ("applyDespeckle", "despeckle"),
        ] {
            run(&mut h, tool, json!({})).unwrap();
            assert_eq!(last_node(&h), json!({ "_obj": obj }));
        }
    }

    #[test]
    fn pixelate_is_mosaic() {
        let mut h = host();
        run(&mut h, "applyPixelate", json!({ "cellSize": 12 })).unwrap();
        let node = last_node(&h);
        assert_eq!(node["_obj"], "mosaic");
        assert_eq!(node["cellSize"]["_unit"], "pixelsUnit");
    }

    #[test]
    fn posterize_levels_are_integers() {
        let mut h = host();
        run(&mut h, "applyPosterize", json!({})).unwrap();
        assert_eq!(last_node(&h)["levels"], 4);
        let err = run(&mut h, "applyPosterize", json!({ "levels": 1 })).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn no_document_is_a_precondition_failure() {
        let mut h = crate::host::MemoryHost::default();
        let err = run(&mut h, "applyEmboss", json!({})).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Precondition);
        assert!(h.submitted().is_empty());
    }
}
