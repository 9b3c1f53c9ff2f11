#![allow(clippy::needless_pass_by_value)]

use crate::build::color::rgb;
use crate::build::effects::{apply, effect, full_scale, layer_effects, linear_contour, with_blend};
use crate::build::gradient::{gradient, opaque_at, ColorStop, OpacityStop};
use crate::build::vocab::{
    BEVEL_DIRECTION, BEVEL_STYLE, BEVEL_TECHNIQUE, BLEND_MODE, GLOW_SOURCE, GRADIENT_TYPE,
    STROKE_POSITION,
};
use crate::descriptor::{action, Batch, Descriptor, ObjectNode, UnitValue};
use crate::error::BridgeError;
use crate::host::Host;
use crate::registry::params::{
    BevelEmbossParams, ColorOverlayParams, DropShadowParams, GradientLayerStyleParams,
    GradientOverlayParams, InnerGlowParams, InnerShadowParams, LayerParams, OuterGlowParams,
    SatinParams, StrokeStyleParams,
};
use crate::registry::validation::{validate_percent, validate_range, validate_stops};
use crate::registry::ToolOutput;
use crate::resolve::TargetRef;

use super::common::{on_layer, on_layer_batch};

/// Select the layer, then `set` its `layerEffects`.
fn set_effects(
    host: &mut dyn Host,
    tool: &str,
    layer: Option<&TargetRef>,
    effects: ObjectNode,
) -> Result<(), BridgeError> {
    on_layer(host, tool, layer, apply(effects)?)?;
    Ok(())
}

fn validate_size(value: f64, name: &str) -> Result<(), BridgeError> {
    validate_range(value, 0.0, 250.0, name)
}

/// Custom gradient plus its opacity stops, defaulting to opaque at each color.
fn custom_gradient(colors: &[ColorStop], opacity: Option<&[OpacityStop]>) -> ObjectNode {
    match opacity {
        Some(stops) => gradient(Some("Custom"), colors, stops),
        None => gradient(Some("Custom"), colors, &opaque_at(colors)),
    }
}

pub fn gradient_layer(
    host: &mut dyn Host,
    p: GradientLayerStyleParams,
) -> Result<ToolOutput, BridgeError> {
    validate_stops(&p.color_stops, p.opacity_stops.as_deref())?;
    validate_range(p.angle, -360.0, 360.0, "angle")?;
    let fill = ObjectNode::new("gradientLayer")
        .with("angle", UnitValue::angle(p.angle))
        .with(
            "gradient",
            custom_gradient(&p.color_stops, p.opacity_stops.as_deref()),
        )
        .with(
            "gradientsInterpolationMethod",
            Descriptor::enumerated("gradientInterpolationMethodType", "smooth"),
        )
        .with("type", GRADIENT_TYPE.node(&p.gradient_type));
    let node = action::make("contentLayer", ObjectNode::new("contentLayer").with("type", fill))?;
    on_layer_batch(
        host,
        "createGradientLayerStyle",
        p.layer_id.as_ref(),
        Batch::single(node),
    )?;
    Ok(ToolOutput::unit(format!(
        "Created {} gradient fill layer with {} color stops.",
        GRADIENT_TYPE.lookup(&p.gradient_type),
        p.color_stops.len()
    )))
}

pub fn stroke(host: &mut dyn Host, p: StrokeStyleParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.size, 1.0, 250.0, "size")?;
    validate_percent(p.opacity, "opacity")?;
    let fx = effect("frameFX")
        .with("color", rgb(p.color))
        .with("overprint", false)
        .with("paintType", Descriptor::enumerated("frameFill", "solidColor"))
        .with("size", UnitValue::pixels(p.size))
        .with("style", STROKE_POSITION.node(&p.position))
        .with("opacity", UnitValue::percent(p.opacity));
    let fx = with_blend(fx, &p.blend_mode);
    set_effects(
        host,
        "addStrokeLayerStyle",
        p.layer_id.as_ref(),
        full_scale(layer_effects(fx)),
    )?;
    Ok(ToolOutput::unit(format!(
        "Added {}px {} stroke.",
        p.size,
        p.color.to_hex()
    )))
}

pub fn drop_shadow(host: &mut dyn Host, p: DropShadowParams) -> Result<ToolOutput, BridgeError> {
    validate_percent(p.opacity, "opacity")?;
    validate_range(p.distance, 0.0, 30000.0, "distance")?;
    validate_percent(p.spread, "spread")?;
    validate_size(p.size, "size")?;
    let fx = effect("dropShadow")
        .with("antiAlias", false)
        .with("blur", UnitValue::pixels(p.size))
        .with("chokeMatte", UnitValue::pixels(p.spread))
        .with("color", rgb(p.color))
        .with("distance", UnitValue::pixels(p.distance))
        .with("layerConceals", true)
        .with("localLightingAngle", UnitValue::angle(p.angle));
    let fx = with_blend(fx, &p.blend_mode)
        .with("noise", UnitValue::percent(0.0))
        .with("opacity", UnitValue::percent(p.opacity))
        .with("transferSpec", linear_contour())
        .with("useGlobalAngle", true);
    let effects = layer_effects(fx).with("globalLightingAngle", UnitValue::angle(p.angle));
    set_effects(
        host,
        "addDropShadowLayerStyle",
        p.layer_id.as_ref(),
        full_scale(effects),
    )?;
    Ok(ToolOutput::unit("Added drop shadow."))
}

pub fn inner_shadow(host: &mut dyn Host, p: InnerShadowParams) -> Result<ToolOutput, BridgeError> {
    validate_percent(p.opacity, "opacity")?;
    validate_percent(p.choke, "choke")?;
    validate_size(p.size, "size")?;
    let fx = with_blend(effect("innerShadow"), &p.blend_mode)
        .with("color", rgb(p.color))
        .with("opacity", UnitValue::percent(p.opacity))
        .with("useGlobalAngle", true)
        .with("localLightingAngle", UnitValue::angle(p.angle))
        .with("distance", UnitValue::pixels(p.distance))
        .with("chokeMatte", UnitValue::pixels(p.choke))
        .with("blur", UnitValue::pixels(p.size))
        .with("antiAlias", false)
        .with("noise", UnitValue::percent(0.0));
    set_effects(
        host,
        "addInnerShadowLayerStyle",
        p.layer_id.as_ref(),
        layer_effects(fx),
    )?;
    Ok(ToolOutput::unit("Added inner shadow."))
}

pub fn outer_glow(host: &mut dyn Host, p: OuterGlowParams) -> Result<ToolOutput, BridgeError> {
    validate_percent(p.opacity, "opacity")?;
    validate_percent(p.spread, "spread")?;
    validate_size(p.size, "size")?;
    validate_percent(p.noise, "noise")?;
    let fx = with_blend(effect("outerGlow"), &p.blend_mode)
        .with("color", rgb(p.color))
        .with("opacity", UnitValue::percent(p.opacity))
        .with("chokeMatte", UnitValue::pixels(p.spread))
        .with("blur", UnitValue::pixels(p.size))
        .with("noise", UnitValue::percent(p.noise))
        .with("antiAlias", false)
        .with("transferSpec", linear_contour());
    set_effects(
        host,
        "addOuterGlowLayerStyle",
        p.layer_id.as_ref(),
        layer_effects(fx),
    )?;
    Ok(ToolOutput::unit("Added outer glow."))
}

pub fn inner_glow(host: &mut dyn Host, p: InnerGlowParams) -> Result<ToolOutput, BridgeError> {
    validate_percent(p.opacity, "opacity")?;
    validate_percent(p.choke, "choke")?;
    validate_size(p.size, "size")?;
    validate_percent(p.noise, "noise")?;
    let fx = with_blend(effect("innerGlow"), &p.blend_mode)
        .with("color", rgb(p.color))
        .with("opacity", UnitValue::percent(p.opacity))
        .with(
            "glowTechnique",
            Descriptor::enumerated("matteTechnique", "softMatte"),
        )
        .with("chokeMatte", UnitValue::pixels(p.choke))
        .with("blur", UnitValue::pixels(p.size))
        .with("noise", UnitValue::percent(p.noise))
        .with("innerGlowSource", GLOW_SOURCE.node(&p.source))
        .with("antiAlias", false)
        .with("transferSpec", linear_contour());
    set_effects(
        host,
        "addInnerGlowLayerStyle",
        p.layer_id.as_ref(),
        layer_effects(fx),
    )?;
    Ok(ToolOutput::unit(format!("Added inner glow from the {}.", p.source)))
}

pub fn bevel_emboss(host: &mut dyn Host, p: BevelEmbossParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.depth, 1.0, 1000.0, "depth")?;
    validate_size(p.size, "size")?;
    validate_range(p.soften, 0.0, 16.0, "soften")?;
    validate_range(p.altitude, 0.0, 90.0, "altitude")?;
    validate_percent(p.highlight_opacity, "highlightOpacity")?;
    validate_percent(p.shadow_opacity, "shadowOpacity")?;
    let fx = effect("bevelEmboss")
        .with("bevelStyle", BEVEL_STYLE.node(&p.style))
        .with("bevelTechnique", BEVEL_TECHNIQUE.node(&p.technique))
        .with("strengthRatio", UnitValue::percent(p.depth))
        .with("bevelDirection", BEVEL_DIRECTION.node(&p.direction))
        .with("blur", UnitValue::pixels(p.size))
        .with("softness", UnitValue::pixels(p.soften))
        .with("localLightingAngle", UnitValue::angle(p.angle))
        .with("localLightingAltitude", UnitValue::angle(p.altitude))
        .with("useGlobalAngle", false)
        .with("highlightMode", BLEND_MODE.node(&p.highlight_mode))
        .with("highlightColor", rgb(p.highlight_color))
        .with("highlightOpacity", UnitValue::percent(p.highlight_opacity))
        .with("shadowMode", BLEND_MODE.node(&p.shadow_mode))
        .with("shadowColor", rgb(p.shadow_color))
        .with("shadowOpacity", UnitValue::percent(p.shadow_opacity))
        .with("antialiasGloss", false)
        .with("transferSpec", linear_contour());
    set_effects(
        host,
        "addBevelEmbossLayerStyle",
        p.layer_id.as_ref(),
        layer_effects(fx),
    )?;
    Ok(ToolOutput::unit(format!(
        "Added {} bevel.",
        BEVEL_STYLE.lookup(&p.style)
    )))
}

pub fn satin(host: &mut dyn Host, p: SatinParams) -> Result<ToolOutput, BridgeError> {
    validate_percent(p.opacity, "opacity")?;
    validate_size(p.distance, "distance")?;
    validate_size(p.size, "size")?;
    let fx = with_blend(effect("chromeFX"), &p.blend_mode)
        .with("color", rgb(p.color))
        .with("antiAlias", true)
        .with("invert", p.invert)
        .with("opacity", UnitValue::percent(p.opacity))
        .with("localLightingAngle", UnitValue::angle(p.angle))
        .with("distance", UnitValue::pixels(p.distance))
        .with("blur", UnitValue::pixels(p.size))
        .with("mappingShape", linear_contour());
    set_effects(host, "addSatinLayerStyle", p.layer_id.as_ref(), layer_effects(fx))?;
    Ok(ToolOutput::unit("Added satin."))
}

pub fn color_overlay(host: &mut dyn Host, p: ColorOverlayParams) -> Result<ToolOutput, BridgeError> {
    validate_percent(p.opacity, "opacity")?;
    let fx = with_blend(effect("solidFill"), &p.blend_mode)
        .with("color", rgb(p.color))
        .with("opacity", UnitValue::percent(p.opacity));
    set_effects(
        host,
        "addColorOverlayLayerStyle",
        p.layer_id.as_ref(),
        layer_effects(fx),
    )?;
    Ok(ToolOutput::unit(format!(
        "Added {} color overlay.",
        p.color.to_hex()
    )))
}

pub fn gradient_overlay(
    host: &mut dyn Host,
    p: GradientOverlayParams,
) -> Result<ToolOutput, BridgeError> {
    validate_stops(&p.color_stops, p.opacity_stops.as_deref())?;
    validate_percent(p.opacity, "opacity")?;
    validate_range(p.scale, 10.0, 150.0, "scale")?;
    let offset = ObjectNode::new("paint")
        .with("horizontal", UnitValue::percent(0.0))
        .with("vertical", UnitValue::percent(0.0));
    let fx = with_blend(effect("gradientFill"), &p.blend_mode)
        .with("opacity", UnitValue::percent(p.opacity))
        .with(
            "gradient",
            custom_gradient(&p.color_stops, p.opacity_stops.as_deref()),
        )
        .with("angle", UnitValue::angle(p.angle))
        .with("type", GRADIENT_TYPE.node(&p.gradient_type))
        .with("reverse", p.reverse)
        .with("align", true)
        .with("scale", UnitValue::percent(p.scale))
        .with("offset", offset);
    set_effects(
        host,
        "addGradientOverlayLayerStyle",
        p.layer_id.as_ref(),
        layer_effects(fx),
    )?;
    Ok(ToolOutput::unit(format!(
        "Added gradient overlay with {} color stops.",
        p.color_stops.len()
    )))
}

pub fn clear(host: &mut dyn Host, p: LayerParams) -> Result<ToolOutput, BridgeError> {
    on_layer(
        host,
        "clearLayerStyles",
        p.layer_id.as_ref(),
        action::on_target_layer("clearLayerEffects"),
    )?;
    Ok(ToolOutput::unit("Cleared layer styles."))
}
