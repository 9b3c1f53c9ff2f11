#![allow(clippy::needless_pass_by_value)]

//! Adjustment and fill layers.
//!
//! Each tool is one batch: a `make` of the layer, followed for most kinds by
//! a `set` on the new (now targeted) adjustment layer carrying the settings.

use crate::build::color::rgb;
use crate::build::gradient::{gradient, opaque_at};
use crate::build::vocab::{CHANNEL, SELECTIVE_COLOR_RANGE};
use crate::descriptor::{action, Batch, Descriptor, ObjectNode, RefChain};
use crate::error::BridgeError;
use crate::host::Host;
use crate::registry::params::{
    BlackAndWhiteParams, BrightnessContrastParams, ChannelMixerParams, ColorBalanceParams,
    CurvesParams, ExposureParams, GradientMapParams, HueSaturationParams, LayerParams,
    LevelsParams, PhotoFilterParams, PosterizeParams, SelectiveColorParams, SolidColorFillParams,
    ThresholdParams, VibranceParams,
};
use crate::registry::validation::{validate_count, validate_range, validate_stops};
use crate::registry::ToolOutput;
use crate::resolve::TargetRef;

use super::common::on_layer_batch;

fn preset(kind: &str) -> Descriptor {
    Descriptor::enumerated("presetKindType", kind)
}

/// `make` an adjustment layer of `kind`, then optionally `set` its settings.
fn add_adjustment(
    host: &mut dyn Host,
    tool: &str,
    layer: Option<&TargetRef>,
    kind: ObjectNode,
    settings: Option<ObjectNode>,
) -> Result<(), BridgeError> {
    let using = ObjectNode::new("adjustmentLayer").with("type", kind);
    let mut batch = Batch::single(action::make("adjustmentLayer", using)?);
    if let Some(settings) = settings {
        batch.push(action::set(RefChain::ordinal("adjustmentLayer"), settings)?);
    }
    on_layer_batch(host, tool, layer, batch)?;
    Ok(())
}

pub fn black_and_white(host: &mut dyn Host, p: BlackAndWhiteParams) -> Result<ToolOutput, BridgeError> {
    let mix = p.colors;
    for (value, name) in [
        (mix.red, "colors.red"),
        (mix.yellow, "colors.yellow"),
        (mix.green, "colors.green"),
        (mix.cyan, "colors.cyan"),
        (mix.blue, "colors.blue"),
        (mix.magenta, "colors.magenta"),
    ] {
        validate_range(value, -200.0, 300.0, name)?;
    }
    let kind = ObjectNode::new("blackAndWhite")
        .with("blue", mix.blue)
        .with("cyan", mix.cyan)
        .with("grain", mix.green)
        .with("magenta", mix.magenta)
        .with("presetKind", preset("presetKindDefault"))
        .with("red", mix.red)
        .with("tintColor", rgb(p.tint_color))
        .with("useTint", p.tint)
        .with("yellow", mix.yellow);
    add_adjustment(host, "addAdjustmentLayerBlackAndWhite", p.layer_id.as_ref(), kind, None)?;
    Ok(ToolOutput::unit("Added Black & White adjustment layer."))
}

pub fn brightness_contrast(
    host: &mut dyn Host,
    p: BrightnessContrastParams,
) -> Result<ToolOutput, BridgeError> {
    validate_range(p.brightness, -150.0, 150.0, "brightness")?;
    validate_range(p.contrast, -50.0, 100.0, "contrast")?;
    let settings = ObjectNode::new("brightnessEvent")
        .with("brightness", p.brightness)
        .with("center", p.contrast)
        .with("useLegacy", false);
    add_adjustment(
        host,
        "addBrightnessContrastAdjustmentLayer",
        p.layer_id.as_ref(),
        ObjectNode::new("brightnessEvent").with("useLegacy", false),
        Some(settings),
    )?;
    Ok(ToolOutput::unit(format!(
        "Added Brightness/Contrast adjustment layer (brightness {}, contrast {}).",
        p.brightness, p.contrast
    )))
}

pub fn vibrance(host: &mut dyn Host, p: VibranceParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.vibrance, -100.0, 100.0, "vibrance")?;
    validate_range(p.saturation, -100.0, 100.0, "saturation")?;
    let settings = ObjectNode::new("vibrance")
        .with("saturation", p.saturation)
        .with("vibrance", p.vibrance);
    add_adjustment(
        host,
        "addAdjustmentLayerVibrance",
        p.layer_id.as_ref(),
        ObjectNode::new("vibrance"),
        Some(settings),
    )?;
    Ok(ToolOutput::unit("Added Vibrance adjustment layer."))
}

pub fn color_balance(host: &mut dyn Host, p: ColorBalanceParams) -> Result<ToolOutput, BridgeError> {
    for (levels, name) in [
        (&p.highlights, "highlights"),
        (&p.midtones, "midtones"),
        (&p.shadows, "shadows"),
    ] {
        for v in levels {
            validate_range(*v, -100.0, 100.0, name)?;
        }
    }
    let zero = || vec![0_i64, 0, 0];
    let kind = ObjectNode::new("colorBalance")
        .with("highlightLevels", zero())
        .with("midtoneLevels", zero())
        .with("preserveLuminosity", true)
        .with("shadowLevels", zero());
    let settings = ObjectNode::new("colorBalance")
        .with("highlightLevels", p.highlights.to_vec())
        .with("midtoneLevels", p.midtones.to_vec())
        .with("shadowLevels", p.shadows.to_vec());
    add_adjustment(
        host,
        "addColorBalanceAdjustmentLayer",
        p.layer_id.as_ref(),
        kind,
        Some(settings),
    )?;
    Ok(ToolOutput::unit("Added Color Balance adjustment layer."))
}

pub fn curves(host: &mut dyn Host, p: CurvesParams) -> Result<ToolOutput, BridgeError> {
    if p.points.len() < 2 {
        return Err(BridgeError::validation("A curve needs at least 2 points"));
    }
    for point in &p.points {
        validate_range(point.input, 0.0, 255.0, "points.input")?;
        validate_range(point.output, 0.0, 255.0, "points.output")?;
    }
    let curve: Vec<ObjectNode> = p
        .points
        .iter()
        .map(|pt| {
            ObjectNode::new("paint")
                .with("horizontal", pt.input)
                .with("vertical", pt.output)
        })
        .collect();
    let settings = ObjectNode::new("curves").with(
        "adjustment",
        vec![ObjectNode::new("curvesAdjustment")
            .with("channel", CHANNEL.node(&p.channel))
            .with("curve", curve)],
    );
    add_adjustment(
        host,
        "addCurvesAdjustmentLayer",
        p.layer_id.as_ref(),
        ObjectNode::new("curves").with("presetKind", preset("presetKindCustom")),
        Some(settings),
    )?;
    Ok(ToolOutput::unit(format!(
        "Added Curves adjustment layer with {} points on {}.",
        p.points.len(),
        p.channel
    )))
}

pub fn levels(host: &mut dyn Host, p: LevelsParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.input_shadow, 0.0, 253.0, "inputShadow")?;
    validate_range(p.input_highlight, 2.0, 255.0, "inputHighlight")?;
    if p.input_shadow >= p.input_highlight {
        return Err(BridgeError::validation(
            "inputShadow must be below inputHighlight",
        ));
    }
    validate_range(p.input_midtone, 0.1, 9.99, "inputMidtone")?;
    validate_range(p.output_shadow, 0.0, 255.0, "outputShadow")?;
    validate_range(p.output_highlight, 0.0, 255.0, "outputHighlight")?;

    let settings = ObjectNode::new("levels").with(
        "adjustment",
        vec![ObjectNode::new("levelsAdjustment")
            .with("channel", CHANNEL.node(&p.channel))
            .with("gamma", p.input_midtone)
            .with("input", vec![p.input_shadow, p.input_highlight])
            .with("output", vec![p.output_shadow, p.output_highlight])],
    );
    add_adjustment(
        host,
        "addLevelsAdjustmentLayer",
        p.layer_id.as_ref(),
        ObjectNode::new("levels").with("presetKind", preset("presetKindDefault")),
        Some(settings),
    )?;
    Ok(ToolOutput::unit("Added Levels adjustment layer."))
}

pub fn hue_saturation(host: &mut dyn Host, p: HueSaturationParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.hue, -180.0, 180.0, "hue")?;
    validate_range(p.saturation, -100.0, 100.0, "saturation")?;
    validate_range(p.lightness, -100.0, 100.0, "lightness")?;
    let settings = ObjectNode::new("hueSaturation")
        .with(
            "adjustment",
            vec![ObjectNode::new("hueSatAdjustmentV2")
                .with("hue", p.hue)
                .with("saturation", p.saturation)
                .with("lightness", p.lightness)],
        )
        .with("colorize", p.colorize);
    add_adjustment(
        host,
        "addHueSaturationAdjustmentLayer",
        p.layer_id.as_ref(),
        ObjectNode::new("hueSaturation").with("presetKind", preset("presetKindDefault")),
        Some(settings),
    )?;
    Ok(ToolOutput::unit("Added Hue/Saturation adjustment layer."))
}

pub fn photo_filter(host: &mut dyn Host, p: PhotoFilterParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.density, 1.0, 100.0, "density")?;
    let kind = ObjectNode::new("photoFilter")
        .with("color", rgb(p.color))
        .with("density", p.density)
        .with("preserveLuminosity", p.preserve_luminosity);
    add_adjustment(host, "addPhotoFilterAdjustmentLayer", p.layer_id.as_ref(), kind, None)?;
    Ok(ToolOutput::unit(format!(
        "Added Photo Filter adjustment layer ({} at {}%).",
        p.color.to_hex(),
        p.density
    )))
}

pub fn channel_mixer(host: &mut dyn Host, p: ChannelMixerParams) -> Result<ToolOutput, BridgeError> {
    for (v, name) in [(p.red, "red"), (p.green, "green"), (p.blue, "blue"), (p.constant, "constant")] {
        validate_range(v, -200.0, 200.0, name)?;
    }
    let settings = ObjectNode::new("channelMixer")
        .with("outputChannel", CHANNEL.node(&p.output_channel))
        .with("red", p.red)
        .with("grain", p.green)
        .with("blue", p.blue)
        .with("constant", p.constant);
    add_adjustment(
        host,
        "addChannelMixerAdjustmentLayer",
        p.layer_id.as_ref(),
        ObjectNode::new("channelMixer").with("monochromatic", p.monochrome),
        Some(settings),
    )?;
    Ok(ToolOutput::unit("Added Channel Mixer adjustment layer."))
}

pub fn gradient_map(host: &mut dyn Host, p: GradientMapParams) -> Result<ToolOutput, BridgeError> {
    validate_stops(&p.color_stops, None)?;
    let kind = ObjectNode::new("gradientMapClass")
        .with(
            "gradient",
            gradient(None, &p.color_stops, &opaque_at(&p.color_stops)),
        )
        .with("reverse", p.reverse);
    add_adjustment(host, "addGradientMapAdjustmentLayer", p.layer_id.as_ref(), kind, None)?;
    Ok(ToolOutput::unit(format!(
        "Added Gradient Map adjustment layer with {} stops.",
        p.color_stops.len()
    )))
}

pub fn posterize(host: &mut dyn Host, p: PosterizeParams) -> Result<ToolOutput, BridgeError> {
    validate_count(p.levels, 2, 255, "levels")?;
    let kind = ObjectNode::new("posterize").with("levels", p.levels);
    add_adjustment(host, "addPosterizeAdjustmentLayer", p.layer_id.as_ref(), kind, None)?;
    Ok(ToolOutput::unit(format!(
        "Added Posterize adjustment layer ({} levels).",
        p.levels
    )))
}

pub fn threshold(host: &mut dyn Host, p: ThresholdParams) -> Result<ToolOutput, BridgeError> {
    validate_count(p.level, 1, 255, "level")?;
    let kind = ObjectNode::new("threshold").with("level", p.level);
    add_adjustment(host, "addThresholdAdjustmentLayer", p.layer_id.as_ref(), kind, None)?;
    Ok(ToolOutput::unit(format!(
        "Added Threshold adjustment layer (level {}).",
        p.level
    )))
}

pub fn selective_color(
    host: &mut dyn Host,
    p: SelectiveColorParams,
) -> Result<ToolOutput, BridgeError> {
    for (v, name) in [
        (p.cyan, "cyan"),
        (p.magenta, "magenta"),
        (p.yellow, "yellow"),
        (p.black, "black"),
    ] {
        validate_range(v, -100.0, 100.0, name)?;
    }
    let settings = ObjectNode::new("selectiveColor").with(
        "colorCorrection",
        vec![ObjectNode::new("colorCorrection")
            .with("colors", SELECTIVE_COLOR_RANGE.node(&p.colors))
            .with("cyan", p.cyan)
            .with("magenta", p.magenta)
            .with("yellowColor", p.yellow)
            .with("black", p.black)],
    );
    add_adjustment(
        host,
        "addSelectiveColorAdjustmentLayer",
        p.layer_id.as_ref(),
        ObjectNode::new("selectiveColor"),
        Some(settings),
    )?;
    Ok(ToolOutput::unit(format!(
        "Added Selective Color adjustment layer for {}.",
        p.colors
    )))
}

pub fn exposure(host: &mut dyn Host, p: ExposureParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.exposure, -20.0, 20.0, "exposure")?;
    validate_range(p.offset, -0.5, 0.5, "offset")?;
    validate_range(p.gamma, 0.01, 9.99, "gamma")?;
    let kind = ObjectNode::new("exposure")
        .with("exposure", p.exposure)
        .with("offset", p.offset)
        .with("gammaCorrection", p.gamma);
    add_adjustment(host, "addExposureAdjustmentLayer", p.layer_id.as_ref(), kind, None)?;
    Ok(ToolOutput::unit("Added Exposure adjustment layer."))
}

pub fn invert(host: &mut dyn Host, p: LayerParams) -> Result<ToolOutput, BridgeError> {
    add_adjustment(
        host,
        "addInvertAdjustmentLayer",
        p.layer_id.as_ref(),
        ObjectNode::new("invert"),
        None,
    )?;
    Ok(ToolOutput::unit("Added Invert adjustment layer."))
}

pub fn solid_color_fill(
    host: &mut dyn Host,
    p: SolidColorFillParams,
) -> Result<ToolOutput, BridgeError> {
    let using = ObjectNode::new("contentLayer")
        .with("type", ObjectNode::new("solidColorLayer").with("color", rgb(p.color)));
    on_layer_batch(
        host,
        "addSolidColorFillLayer",
        p.layer_id.as_ref(),
        Batch::single(action::make("contentLayer", using)?),
    )?;
    Ok(ToolOutput::unit(format!(
        "Added solid color fill layer ({}).",
        p.color.to_hex()
    )))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::super::fixtures::{host, run};
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn threshold_is_a_single_make() {
        let mut h = host();
        let sent = run(&mut h, "addThresholdAdjustmentLayer", json!({ "level": 200 })).unwrap();
        assert_eq!(sent.as_array().unwrap().len(), 1);
        let make = &sent[0][0];
        assert_eq!(make["_obj"], "make");
        assert_eq!(make["_target"][0], json!({ "_ref": "adjustmentLayer" }));
        assert_eq!(make["using"]["_obj"], "adjustmentLayer");
        assert_eq!(make["using"]["type"], json!({ "_obj": "threshold", "level": 200 }));
    }

    #[test]
    fn threshold_level_out_of_range() {
        let mut h = host();
        let err = run(&mut h, "addThresholdAdjustmentLayer", json!({ "level": 0 })).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(h.submitted().is_empty());
    }

    #[test]
    fn brightness_contrast_makes_then_sets() {
        let mut h = host();
        let sent = run(
            &mut h,
            "addBrightnessContrastAdjustmentLayer",
            json!({ "brightness": 20, "contrast": -10 }),
        )
        .unwrap();
        let batch = &sent[0];
        assert_eq!(batch[0]["using"]["type"], json!({ "_obj": "brightnessEvent", "useLegacy": false }));
        assert_eq!(batch[1]["_obj"], "set");
        assert_eq!(
            batch[1]["_target"][0],
            json!({ "_ref": "adjustmentLayer", "_enum": "ordinal", "_value": "targetEnum" })
        );
        assert_eq!(batch[1]["to"]["center"], -10.0);
    }

    #[test]
    fn layer_is_selected_before_make() {
        let mut h = host();
        let sent = run(&mut h, "addInvertAdjustmentLayer", json!({ "layerId": "Sky" })).unwrap();
        assert_eq!(sent[0][0]["_obj"], "select");
        assert_eq!(sent[0][0]["_target"][0]["_id"], 2);
        assert_eq!(sent[1][0]["using"]["type"]["_obj"], "invert");
    }

    #[test]
    fn curves_map_points_and_channel() {
        let mut h = host();
        let sent = run(
            &mut h,
            "addCurvesAdjustmentLayer",
            json!({ "channel": "green", "points": [{ "input": 0, "output": 10 }, { "input": 128, "output": 140 }, { "input": 255, "output": 255 }] }),
        )
        .unwrap();
        let adj = &sent[0][1]["to"]["adjustment"][0];
        assert_eq!(adj["channel"]["_value"], "grain");
        assert_eq!(adj["curve"][1], json!({ "_obj": "paint", "horizontal": 128.0, "vertical": 140.0 }));

        let err = run(&mut h, "addCurvesAdjustmentLayer", json!({ "points": [{ "input": 0, "output": 0 }] }))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn black_and_white_defaults() {
        let mut h = host();
        let sent = run(&mut h, "addAdjustmentLayerBlackAndWhite", json!({})).unwrap();
        let kind = &sent[0][0]["using"]["type"];
        assert_eq!(kind["red"], 40.0);
        assert_eq!(kind["grain"], 40.0);
        assert_eq!(kind["magenta"], 80.0);
        assert_eq!(kind["useTint"], false);
        assert_eq!(kind["tintColor"]["red"], 225);
    }

    #[test]
    fn gradient_map_is_unnamed_and_opaque() {
        let mut h = host();
        let sent = run(&mut h, "addGradientMapAdjustmentLayer", json!({})).unwrap();
        let g = &sent[0][0]["using"]["type"]["gradient"];
        assert!(g.get("name").is_none());
        assert_eq!(g["colors"][1]["location"], 4096);
        assert_eq!(g["transparency"][1]["opacity"]["_value"], 100.0);
    }

    #[test]
    fn selective_color_uses_yellow_color_field() {
        let mut h = host();
        let sent = run(
            &mut h,
            "addSelectiveColorAdjustmentLayer",
            json!({ "colors": "Blues", "yellow": 15 }),
        )
        .unwrap();
        let cc = &sent[0][1]["to"]["colorCorrection"][0];
        assert_eq!(cc["colors"]["_value"], "blues");
        assert_eq!(cc["yellowColor"], 15.0);
    }

    #[test]
    fn solid_fill_makes_content_layer() {
        let mut h = host();
        let sent = run(&mut h, "addSolidColorFillLayer", json!({})).unwrap();
        assert_eq!(sent[0][0]["_target"][0]["_ref"], "contentLayer");
        assert_eq!(sent[0][0]["using"]["type"]["color"]["red"], 255);
    }

    #[test]
    fn vibrance_is_a_typed_object() {
        let mut h = host();
        let sent = run(&mut h, "addAdjustmentLayerVibrance", json!({ "vibrance": 30 })).unwrap();
        assert_eq!(sent[0][0]["using"]["type"], json!({ "_obj": "vibrance" }));
        assert_eq!(sent[0][1]["to"]["vibrance"], 30.0);
    }
}
