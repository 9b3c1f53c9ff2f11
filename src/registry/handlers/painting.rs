#![allow(clippy::needless_pass_by_value)]

use crate::build::color::{foreground, rgb};
use crate::build::gradient::{gradient, opaque_at};
use crate::build::paint::{brush, brush_target, paint, select_tool, StrokeSpec};
use crate::build::path::paint_point;
use crate::build::vocab::GRADIENT_TYPE;
use crate::descriptor::{action, Batch, Descriptor, ObjectNode, UnitValue};
use crate::error::BridgeError;
use crate::host::Host;
use crate::model::Point;
use crate::registry::params::{
    BrushStrokeParams, EraserStrokeParams, GradientDrawParams, PaintBucketParams,
};
use crate::registry::validation::{
    validate_percent, validate_points, validate_range, validate_stops,
};
use crate::registry::ToolOutput;
use crate::scope::{with_scope, Precondition};

use super::common::on_layer_batch;

fn validate_brush(size: f64, hardness: f64, opacity: f64) -> Result<(), BridgeError> {
    validate_range(size, 1.0, 5000.0, "brushSize")?;
    validate_percent(hardness, "hardness")?;
    validate_percent(opacity, "opacity")
}

/// Set foreground, set brush tip, paint through the points.
pub fn brush_stroke(host: &mut dyn Host, p: BrushStrokeParams) -> Result<ToolOutput, BridgeError> {
    validate_points(&p.points, 1, "points")?;
    validate_brush(p.brush_size, p.hardness, p.opacity)?;
    validate_percent(p.flow, "flow")?;
    let batch = Batch::new()
        .with(action::set(foreground(), rgb(p.color))?)
        .with(action::set(brush_target(), brush(p.brush_size, p.hardness))?)
        .with(paint(StrokeSpec {
            points: &p.points,
            opacity: p.opacity,
            flow: Some(p.flow),
        })?);
    on_layer_batch(host, "brushStroke", p.layer_id.as_ref(), batch)?;
    Ok(ToolOutput::unit(format!(
        "Painted {}-point {} stroke.",
        p.points.len(),
        p.color.to_hex()
    )))
}

/// Erase along the points with the eraser tool, then put the brush tool back.
pub fn eraser_stroke(host: &mut dyn Host, p: EraserStrokeParams) -> Result<ToolOutput, BridgeError> {
    validate_points(&p.points, 1, "points")?;
    validate_brush(p.brush_size, p.hardness, p.opacity)?;
    let batch = Batch::new()
        .with(select_tool("eraserTool"))
        .with(action::set(brush_target(), brush(p.brush_size, p.hardness))?)
        .with(paint(StrokeSpec {
            points: &p.points,
            opacity: p.opacity,
            flow: None,
        })?);
    with_scope(host, "eraserStroke", Some(Precondition::ActiveDocument), |s| {
        s.target_layer(p.layer_id.as_ref())?;
        s.defer(Batch::single(select_tool("paintbrushTool")));
        s.submit(batch)
    })?;
    Ok(ToolOutput::unit(format!("Erased along {} points.", p.points.len())))
}

pub fn gradient_draw(host: &mut dyn Host, p: GradientDrawParams) -> Result<ToolOutput, BridgeError> {
    validate_stops(&p.color_stops, None)?;
    validate_percent(p.opacity, "opacity")?;
    let node = ObjectNode::new("gradientClassEvent")
        .with("from", paint_point(p.start_point))
        .with("to", paint_point(p.end_point))
        .with("type", GRADIENT_TYPE.node(&p.gradient_type))
        .with(
            "gradient",
            gradient(Some("Custom"), &p.color_stops, &opaque_at(&p.color_stops)),
        )
        .with("opacity", UnitValue::percent(p.opacity))
        .with("mode", Descriptor::enumerated("blendMode", "normal"))
        .with("useMask", true)
        .with("dither", true);
    on_layer_batch(host, "gradientDraw", p.layer_id.as_ref(), Batch::single(node))?;
    Ok(ToolOutput::unit(format!(
        "Drew {} gradient from ({}, {}) to ({}, {}).",
        GRADIENT_TYPE.lookup(&p.gradient_type),
        p.start_point.x,
        p.start_point.y,
        p.end_point.x,
        p.end_point.y
    )))
}

pub fn paint_bucket(host: &mut dyn Host, p: PaintBucketParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.tolerance, 0.0, 255.0, "tolerance")?;
    validate_percent(p.opacity, "opacity")?;
    let fill = ObjectNode::new("fill")
        .with("from", paint_point(Point::new(p.x, p.y)))
        .with("tolerance", p.tolerance)
        .with("antiAlias", true)
        .with("contiguous", p.contiguous)
        .with("using", Descriptor::enumerated("fillContents", "foregroundColor"))
        .with("opacity", UnitValue::percent(p.opacity))
        .with("mode", Descriptor::enumerated("blendMode", "normal"));
    let batch = Batch::new()
        .with(action::set(foreground(), rgb(p.color))?)
        .with(fill);
    on_layer_batch(host, "paintBucketFill", p.layer_id.as_ref(), batch)?;
    Ok(ToolOutput::unit(format!(
        "Filled from ({}, {}) with {}.",
        p.x,
        p.y,
        p.color.to_hex()
    )))
}
