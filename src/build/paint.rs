use crate::descriptor::{Descriptor, ObjectNode, RefChain, RefForm, RefSegment, UnitValue};
use crate::error::BridgeError;
use crate::model::Point;

use super::path::paint_point;

/// `set [{_ref: "brush", ordinal}] to brush{diameter, hardness}`. The target
/// is not a property reference, so no payload check applies.
pub fn brush_target() -> RefChain {
    RefChain::new(vec![RefSegment::new("brush", RefForm::Ordinal)])
}

pub fn brush(diameter: f64, hardness: f64) -> ObjectNode {
    ObjectNode::new("brush")
        .with("diameter", UnitValue::pixels(diameter))
        .with("hardness", UnitValue::percent(hardness))
}

/// `select [{_ref: tool}]`, e.g. `eraserTool` or `paintbrushTool`.
pub fn select_tool(tool: &str) -> ObjectNode {
    ObjectNode::new("select").with_target(RefChain::class(tool))
}

fn paint_stroke_point(p: Point) -> ObjectNode {
    ObjectNode::new("paintPoint")
        .with("horizontal", UnitValue::pixels(p.x))
        .with("vertical", UnitValue::pixels(p.y))
        .with("pressure", UnitValue::percent(100.0))
}

/// Parameters of one `paint` stroke.
#[derive(Debug, Clone, Copy)]
pub struct StrokeSpec<'a> {
    pub points: &'a [Point],
    pub opacity: f64,
    /// Brush strokes carry flow and target the active layer; eraser strokes do
    /// neither.
    pub flow: Option<f64>,
}

/// A `paint` node running from the first point to the last through every
/// point in order.
pub fn paint(spec: StrokeSpec<'_>) -> Result<ObjectNode, BridgeError> {
    let (Some(first), Some(last)) = (spec.points.first(), spec.points.last()) else {
        return Err(BridgeError::validation("A stroke needs at least one point"));
    };
    let mut node = ObjectNode::new("paint");
    if spec.flow.is_some() {
        node.insert("_target", RefChain::target_layer());
    }
    Ok(node
        .with("mode", Descriptor::enumerated("blendMode", "normal"))
        .with("opacity", UnitValue::percent(spec.opacity))
        .with_opt("flow", spec.flow.map(UnitValue::percent))
        .with("from", paint_point(*first))
        .with("to", paint_point(*last))
        .with(
            "strokeList",
            spec.points
                .iter()
                .map(|p| paint_stroke_point(*p))
                .collect::<Vec<_>>(),
        ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn brush_stroke_targets_layer_and_keeps_order() {
        let pts = [Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 0.0)];
        let node = paint(StrokeSpec {
            points: &pts,
            opacity: 80.0,
            flow: Some(50.0),
        })
        .unwrap();
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["_target"][0]["_ref"], "layer");
        assert_eq!(json["flow"]["_value"], 50.0);
        assert_eq!(json["to"]["horizontal"]["_value"], 10.0);
        assert_eq!(json["strokeList"].as_array().unwrap().len(), 3);
        assert_eq!(json["strokeList"][1]["pressure"]["_unit"], "percentUnit");
    }

    #[test]
    fn eraser_stroke_has_no_flow_or_target() {
        let node = paint(StrokeSpec {
            points: &[Point::new(1.0, 1.0)],
            opacity: 100.0,
            flow: None,
        })
        .unwrap();
        let json = serde_json::to_value(&node).unwrap();
        assert!(json.get("_target").is_none());
        assert!(json.get("flow").is_none());
        assert_eq!(json["from"], json["to"]);
    }

    #[test]
    fn empty_stroke_is_rejected() {
        let err = paint(StrokeSpec {
            points: &[],
            opacity: 100.0,
            flow: None,
        })
        .unwrap_err();
        assert!(matches!(err, BridgeError::Validation { .. }));
    }
}
