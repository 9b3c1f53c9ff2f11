#![allow(clippy::needless_pass_by_value)]

use crate::build::vocab::WARP_STYLE;
use crate::descriptor::{action, Batch, Descriptor, ObjectNode, UnitValue};
use crate::error::BridgeError;
use crate::host::Host;
use crate::model::{Bounds, Point};
use crate::registry::params::{
    ContentAwareScaleParams, FreeTransformParams, LayerParams, PerspectiveParams, WarpParams,
};
use crate::registry::validation::validate_range;
use crate::registry::ToolOutput;
use crate::scope::{with_scope, Precondition};

use super::common::on_layer;

/// A transform-family node on the active layer, pivoting on the average of
/// its corners with automatic bicubic resampling.
fn layer_transform(tag: &str) -> ObjectNode {
    action::on_target_layer(tag).with(
        "freeTransformCenterState",
        Descriptor::enumerated("quadCenterState", "QCSAverage"),
    )
}

fn with_interpolation(node: ObjectNode) -> ObjectNode {
    node.with(
        "interfaceIconFrameDimmed",
        Descriptor::enumerated("interpolationType", "bicubicAutomatic"),
    )
}

fn validate_scale(width: f64, height: f64) -> Result<(), BridgeError> {
    validate_range(width, 0.1, 10000.0, "width")?;
    validate_range(height, 0.1, 10000.0, "height")
}

pub fn free_transform(host: &mut dyn Host, p: FreeTransformParams) -> Result<ToolOutput, BridgeError> {
    validate_scale(p.width, p.height)?;
    validate_range(p.angle, -360.0, 360.0, "angle")?;
    validate_range(p.skew_x, -89.0, 89.0, "skewX")?;
    validate_range(p.skew_y, -89.0, 89.0, "skewY")?;
    let skew = ObjectNode::new("paint")
        .with("horizontal", UnitValue::angle(p.skew_x))
        .with("vertical", UnitValue::angle(p.skew_y));
    let offset = ObjectNode::new("offset")
        .with("horizontal", UnitValue::pixels(p.move_x))
        .with("vertical", UnitValue::pixels(p.move_y));
    let node = layer_transform("transform")
        .with("width", UnitValue::percent(p.width))
        .with("height", UnitValue::percent(p.height))
        .with("angle", UnitValue::angle(p.angle))
        .with("skew", skew)
        .with("offset", offset);
    on_layer(host, "freeTransform", p.layer_id.as_ref(), with_interpolation(node))?;
    Ok(ToolOutput::unit(format!(
        "Transformed layer to {}% x {}%, rotated {}°.",
        p.width, p.height, p.angle
    )))
}

/// Preset warp. The distortions feed the perspective terms; rotation stays
/// horizontal.
pub fn warp(host: &mut dyn Host, p: WarpParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.bend, -100.0, 100.0, "bend")?;
    validate_range(p.horizontal_distortion, -100.0, 100.0, "horizontalDistortion")?;
    validate_range(p.vertical_distortion, -100.0, 100.0, "verticalDistortion")?;
    let warp = ObjectNode::new("warp")
        .with("warpStyle", WARP_STYLE.node(&p.warp_style))
        .with("warpValue", p.bend)
        .with("warpPerspective", p.horizontal_distortion)
        .with("warpPerspectiveOther", p.vertical_distortion)
        .with("warpRotate", Descriptor::enumerated("orientation", "horizontal"));
    let node = layer_transform("transform").with("warp", warp);
    on_layer(host, "warpTransform", p.layer_id.as_ref(), with_interpolation(node))?;
    Ok(ToolOutput::unit(format!(
        "Applied {} warp with bend {}.",
        WARP_STYLE.lookup(&p.warp_style),
        p.bend
    )))
}

/// Corner extremes as a percent-space rectangle. The transform rectangle is
/// axis-aligned, so each edge takes the outermost of its two corners.
fn corner_extent(p: &PerspectiveParams) -> Result<Bounds, BridgeError> {
    let corners = [
        ("topLeft", p.top_left),
        ("topRight", p.top_right),
        ("bottomRight", p.bottom_right),
        ("bottomLeft", p.bottom_left),
    ];
    for (name, c) in corners {
        validate_range(c.x, -1000.0, 1000.0, &format!("{name}.x"))?;
        validate_range(c.y, -1000.0, 1000.0, &format!("{name}.y"))?;
    }
    let extent = Bounds::new(
        p.top_left.y.min(p.top_right.y),
        p.top_left.x.min(p.bottom_left.x),
        p.bottom_left.y.max(p.bottom_right.y),
        p.top_right.x.max(p.bottom_right.x),
    );
    if extent.width() <= 0.0 || extent.height() <= 0.0 {
        return Err(BridgeError::validation(
            "corners must enclose a positive area",
        ));
    }
    Ok(extent)
}

fn scale_into(bounds: Bounds, percent: Point) -> Point {
    Point::new(
        bounds.left + percent.x / 100.0 * bounds.width(),
        bounds.top + percent.y / 100.0 * bounds.height(),
    )
}

fn rectangle(r: Bounds) -> ObjectNode {
    ObjectNode::new("rectangle")
        .with("top", UnitValue::pixels(r.top))
        .with("left", UnitValue::pixels(r.left))
        .with("bottom", UnitValue::pixels(r.bottom))
        .with("right", UnitValue::pixels(r.right))
}

/// Map the layer onto the rectangle its corners describe, in percent of the
/// layer bounds. Unreported bounds fall back to the canvas.
pub fn perspective(host: &mut dyn Host, p: PerspectiveParams) -> Result<ToolOutput, BridgeError> {
    let extent = corner_extent(&p)?;
    let rect = with_scope(
        host,
        "perspectiveTransform",
        Some(Precondition::ActiveDocument),
        |s| {
            let handle = s.target_layer(p.layer_id.as_ref())?;
            let doc = s.document()?;
            let layer = match handle.and_then(|h| h.id) {
                Some(id) => doc.layer(id),
                None => doc.all_layers().into_iter().find(|l| l.selected),
            };
            let bounds = layer.and_then(|l| l.bounds).unwrap_or_else(|| doc.canvas());
            let top_left = scale_into(bounds, Point::new(extent.left, extent.top));
            let bottom_right = scale_into(bounds, Point::new(extent.right, extent.bottom));
            let rect = Bounds::new(top_left.y, top_left.x, bottom_right.y, bottom_right.x);
            let node = layer_transform("transform").with("rectangle", rectangle(rect));
            s.submit(Batch::single(with_interpolation(node)))?;
            Ok(rect)
        },
    )?;
    Ok(ToolOutput::unit(format!(
        "Mapped layer onto {}x{}px at ({}, {}).",
        rect.width(),
        rect.height(),
        rect.left,
        rect.top
    )))
}

pub fn content_aware_scale(
    host: &mut dyn Host,
    p: ContentAwareScaleParams,
) -> Result<ToolOutput, BridgeError> {
    validate_scale(p.width, p.height)?;
    let node = layer_transform("contentAwareScale")
        .with("width", UnitValue::percent(p.width))
        .with("height", UnitValue::percent(p.height));
    on_layer(host, "contentAwareScale", p.layer_id.as_ref(), with_interpolation(node))?;
    Ok(ToolOutput::unit(format!(
        "Content-aware scaled to {}% x {}%.",
        p.width, p.height
    )))
}

pub fn convert_to_smart_object(host: &mut dyn Host, p: LayerParams) -> Result<ToolOutput, BridgeError> {
    on_layer(
        host,
        "convertToSmartObject",
        p.layer_id.as_ref(),
        action::event("newPlacedLayer"),
    )?;
    Ok(ToolOutput::unit("Converted to smart object."))
}
