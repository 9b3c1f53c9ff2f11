#![allow(clippy::needless_pass_by_value)]

use serde_json::json;

use crate::build::vocab::{SPHERIZE_MODE, WAVE_TYPE};
use crate::descriptor::{action, Batch, Descriptor, ObjectNode, UnitValue};
use crate::error::BridgeError;
use crate::host::Host;
use crate::registry::params::{
    DisplaceParams, LayerParams, LensCorrectionParams, LiquifyParams, ShadowsHighlightsParams,
    SpherizeParams, WaveParams,
};
use crate::registry::validation::{validate_count, validate_percent, validate_range};
use crate::registry::ToolOutput;
use crate::scope::Precondition;

use super::common::{on_layer, submit};

pub fn content_aware_fill(host: &mut dyn Host) -> Result<ToolOutput, BridgeError> {
    let node = ObjectNode::new("fill")
        .with("using", Descriptor::enumerated("fillContents", "contentAware"))
        .with("opacity", UnitValue::percent(100.0))
        .with("mode", Descriptor::enumerated("blendMode", "normal"));
    submit(
        host,
        "contentAwareFill",
        Precondition::ActiveSelection,
        Batch::single(node),
    )?;
    Ok(ToolOutput::unit("Filled selection from surrounding content."))
}

pub fn auto_tone(host: &mut dyn Host, p: LayerParams) -> Result<ToolOutput, BridgeError> {
    on_layer(host, "autoTone", p.layer_id.as_ref(), action::event("autoTone"))?;
    Ok(ToolOutput::unit("Applied auto tone."))
}

pub fn auto_color(host: &mut dyn Host, p: LayerParams) -> Result<ToolOutput, BridgeError> {
    on_layer(host, "autoColor", p.layer_id.as_ref(), action::event("autoColor"))?;
    Ok(ToolOutput::unit("Applied auto color."))
}

pub fn auto_contrast(host: &mut dyn Host, p: LayerParams) -> Result<ToolOutput, BridgeError> {
    on_layer(
        host,
        "autoContrast",
        p.layer_id.as_ref(),
        action::event("autoContrast"),
    )?;
    Ok(ToolOutput::unit("Applied auto contrast."))
}

pub fn shadows_highlights(
    host: &mut dyn Host,
    p: ShadowsHighlightsParams,
) -> Result<ToolOutput, BridgeError> {
    validate_percent(p.shadow_amount, "shadowAmount")?;
    validate_percent(p.shadow_tonal_width, "shadowTonalWidth")?;
    validate_range(p.shadow_radius, 0.0, 2500.0, "shadowRadius")?;
    validate_percent(p.highlight_amount, "highlightAmount")?;
    validate_percent(p.highlight_tonal_width, "highlightTonalWidth")?;
    validate_range(p.highlight_radius, 0.0, 2500.0, "highlightRadius")?;
    validate_range(p.color_correction, -100.0, 100.0, "colorCorrection")?;
    validate_range(p.midtone_contrast, -100.0, 100.0, "midtoneContrast")?;
    validate_range(p.black_clip, 0.0, 50.0, "blackClip")?;
    validate_range(p.white_clip, 0.0, 50.0, "whiteClip")?;
    let node = ObjectNode::new("shadowHighlight")
        .with("shadowAmount", UnitValue::percent(p.shadow_amount))
        .with("shadowWidth", UnitValue::percent(p.shadow_tonal_width))
        .with("shadowRadiusPixels", p.shadow_radius)
        .with("highlightAmount", UnitValue::percent(p.highlight_amount))
        .with("highlightWidth", UnitValue::percent(p.highlight_tonal_width))
        .with("highlightRadiusPixels", p.highlight_radius)
        .with("colorCorrection", p.color_correction)
        .with("midtoneContrast", p.midtone_contrast)
        .with("blackClip", UnitValue::percent(p.black_clip))
        .with("whiteClip", UnitValue::percent(p.white_clip));
    on_layer(host, "shadowsHighlights", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit("Applied shadows/highlights."))
}

pub fn lens_correction(
    host: &mut dyn Host,
    p: LensCorrectionParams,
) -> Result<ToolOutput, BridgeError> {
    validate_range(p.distortion, -100.0, 100.0, "distortion")?;
    validate_range(p.vignette, -100.0, 100.0, "vignette")?;
    validate_range(p.vignette_midpoint, 0.0, 100.0, "vignetteMidpoint")?;
    validate_range(p.chromatic_aberration_rg, -100.0, 100.0, "chromaticAberrationRG")?;
    validate_range(p.chromatic_aberration_by, -100.0, 100.0, "chromaticAberrationBY")?;
    // The host spells the red/cyan key "RC".
    let node = ObjectNode::new("newLensCorrection")
        .with("lensManualDistortion", p.distortion)
        .with("lensManualChromaticAberrationRC", p.chromatic_aberration_rg)
        .with("lensManualChromaticAberrationBY", p.chromatic_aberration_by)
        .with("lensManualVignette", p.vignette)
        .with("lensManualVignetteMidpoint", p.vignette_midpoint);
    on_layer(host, "lensCorrection", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit("Applied lens correction."))
}

pub fn displace(host: &mut dyn Host, p: DisplaceParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.horizontal_scale, -999.0, 999.0, "horizontalScale")?;
    validate_range(p.vertical_scale, -999.0, 999.0, "verticalScale")?;
    let map = if p.stretch_to_fit { "stretchToFit" } else { "tile" };
    let area = if p.wrap_around {
        "wrapAround"
    } else {
        "repeatEdgePixels"
    };
    let node = ObjectNode::new("displace")
        .with("horizontalScale", p.horizontal_scale)
        .with("verticalScale", p.vertical_scale)
        .with("displacementMap", Descriptor::enumerated("displacementMap", map))
        .with("undefinedArea", Descriptor::enumerated("undefinedArea", area));
    on_layer(host, "applyDisplace", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit("Applied displace."))
}

pub fn spherize(host: &mut dyn Host, p: SpherizeParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.amount, -100.0, 100.0, "amount")?;
    let node = ObjectNode::new("spherize")
        .with("amount", p.amount)
        .with("mode", SPHERIZE_MODE.node(&p.mode));
    on_layer(host, "applySphere", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit(format!("Spherized by {}.", p.amount)))
}

/// The random seed is a parameter so identical options give identical waves.
pub fn wave(host: &mut dyn Host, p: WaveParams) -> Result<ToolOutput, BridgeError> {
    validate_count(p.generators, 1, 999, "generators")?;
    validate_range(p.wavelength_min, 1.0, 999.0, "wavelengthMin")?;
    validate_range(p.wavelength_max, p.wavelength_min, 999.0, "wavelengthMax")?;
    validate_range(p.amplitude_min, 1.0, 999.0, "amplitudeMin")?;
    validate_range(p.amplitude_max, p.amplitude_min, 999.0, "amplitudeMax")?;
    validate_range(p.scale, 1.0, 100.0, "scale")?;
    let node = ObjectNode::new("wave")
        .with("numberOfGenerators", p.generators)
        .with("minimumWavelength", p.wavelength_min)
        .with("maximumWavelength", p.wavelength_max)
        .with("minimumAmplitude", p.amplitude_min)
        .with("maximumAmplitude", p.amplitude_max)
        .with("horizontalScale", UnitValue::percent(p.scale))
        .with("verticalScale", UnitValue::percent(p.scale))
        .with("waveType", WAVE_TYPE.node(&p.wave_type))
        .with("undefinedAreas", Descriptor::enumerated("undefinedArea", "wrapAround"))
        .with("randomSeed", p.random_seed);
    on_layer(host, "applyWave", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::unit(format!(
        "Applied {} wave with {} generators.",
        WAVE_TYPE.lookup(&p.wave_type),
        p.generators
    )))
}

/// Opens liquify on the layer with an empty mesh. The host exposes no way to
/// script a forward-warp stroke, so the requested stroke is validated and
/// echoed in the result data rather than applied.
pub fn liquify_forward(host: &mut dyn Host, p: LiquifyParams) -> Result<ToolOutput, BridgeError> {
    for (name, v) in [
        ("startX", p.start_x),
        ("startY", p.start_y),
        ("endX", p.end_x),
        ("endY", p.end_y),
    ] {
        validate_range(v, -30000.0, 30000.0, name)?;
    }
    validate_range(p.brush_size, 1.0, 15000.0, "brushSize")?;
    validate_range(p.pressure, 1.0, 100.0, "pressure")?;
    let node = ObjectNode::new("liquify").with("liquifyMesh", ObjectNode::new("liquifyMesh"));
    on_layer(host, "liquifyForward", p.layer_id.as_ref(), node)?;
    Ok(ToolOutput::data(
        "Opened liquify with an empty mesh. The forward-warp stroke was not applied.",
        json!({
            "applied": false,
            "stroke": {
                "start": { "x": p.start_x, "y": p.start_y },
                "end": { "x": p.end_x, "y": p.end_y },
                "brushSize": p.brush_size,
                "pressure": p.pressure,
            },
        }),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::super::fixtures::{host, host_with_selection, last_node, run};
    use crate::error::ErrorKind;
    use crate::registry::dispatch::{dispatch, Command};
    use serde_json::json;

    #[test]
    fn liquify_opens_an_empty_mesh_and_reports_the_stroke() {
        let mut h = host();
        let out = dispatch(
            &mut h,
            &Command::new("liquifyForward", json!({ "layerId": 2, "endX": 180 })),
        )
        .unwrap();
        let sent = h.submitted_json();
        assert_eq!(sent[0][0]["_obj"], "select");
        assert_eq!(
            sent[1][0],
            json!({ "_obj": "liquify", "liquifyMesh": { "_obj": "liquifyMesh" } })
        );
        assert_eq!(out.data["applied"], false);
        assert_eq!(out.data["stroke"]["end"]["x"], 180.0);
        assert_eq!(out.data["stroke"]["brushSize"], 64.0);

        let err = run(&mut h, "liquifyForward", json!({ "pressure": 0 })).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn content_aware_fill_needs_a_selection() {
        let mut h = host();
        let err = run(&mut h, "contentAwareFill", json!({})).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Precondition);
        assert!(h.submitted().is_empty());

        let mut h = host_with_selection();
        run(&mut h, "contentAwareFill", json!({})).unwrap();
        assert_eq!(last_node(&h)["using"]["_value"], "contentAware");
    }

    #[test]
    fn auto_corrections_are_bare_events() {
        let mut h = host();
        for tool in ["autoTone", "autoColor", "autoContrast"] {
            run(&mut h, tool, json!({})).unwrap();
            assert_eq!(last_node(&h), json!({ "_obj": tool }));
        }
    }

    #[test]
    fn shadows_highlights_defaults() {
        let mut h = host();
        run(&mut h, "shadowsHighlights", json!({})).unwrap();
        let node = last_node(&h);
        assert_eq!(node["shadowAmount"]["_value"], 35.0);
        assert_eq!(node["shadowRadiusPixels"], 30.0);
        assert_eq!(node["blackClip"]["_value"], 0.01);
        assert_eq!(node["colorCorrection"], 20.0);
    }

    #[test]
    fn lens_correction_keys() {
        let mut h = host();
        run(&mut h, "lensCorrection", json!({ "chromaticAberrationRG": 12 })).unwrap();
        let node = last_node(&h);
        assert_eq!(node["lensManualChromaticAberrationRC"], 12.0);
        assert_eq!(node["lensManualVignetteMidpoint"], 50.0);
    }

    #[test]
    fn displace_flags_pick_enum_values() {
        let mut h = host();
        run(&mut h, "applyDisplace", json!({ "stretchToFit": false, "wrapAround": false })).unwrap();
        let node = last_node(&h);
        assert_eq!(node["displacementMap"]["_value"], "tile");
        assert_eq!(node["undefinedArea"]["_value"], "repeatEdgePixels");
    }

    #[test]
    fn spherize_mode() {
        let mut h = host();
        run(&mut h, "applySphere", json!({ "mode": "vertical", "amount": -40 })).unwrap();
        let node = last_node(&h);
        assert_eq!(node["mode"]["_value"], "verticalOnly");
        assert_eq!(node["amount"], -40.0);
    }

    #[test]
    fn wave_is_deterministic() {
        let mut a = host();
        let mut b = host();
        run(&mut a, "applyWave", json!({ "waveType": "sine" })).unwrap();
        run(&mut b, "applyWave", json!({ "waveType": "sine" })).unwrap();
        assert_eq!(a.last().unwrap().canonical(), b.last().unwrap().canonical());
        let node = last_node(&a);
        assert_eq!(node["waveType"]["_value"], "sinusoidal");
        assert_eq!(node["randomSeed"], 0);
        assert_eq!(node["numberOfGenerators"], 5);
    }

    #[test]
    fn wave_max_below_min_is_rejected() {
        let mut h = host();
        let err = run(
            &mut h,
            "applyWave",
            json!({ "wavelengthMin": 50, "wavelengthMax": 20 }),
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
