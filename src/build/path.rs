//! Points, path components and stroke styles for shape layers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::color::rgb;
use crate::descriptor::{Descriptor, ObjectNode, UnitValue};
use crate::model::{Bounds, Point, RgbColor};

/// `{_obj: "paint", horizontal: px, vertical: px}`
pub fn paint_point(p: Point) -> ObjectNode {
    ObjectNode::new("paint")
        .with("horizontal", UnitValue::pixels(p.x))
        .with("vertical", UnitValue::pixels(p.y))
}

/// An anchor with optional bezier handles, as callers describe custom paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PathVertex {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub left_direction: Option<Point>,
    #[serde(default)]
    pub right_direction: Option<Point>,
}

impl From<Point> for PathVertex {
    fn from(p: Point) -> Self {
        Self {
            x: p.x,
            y: p.y,
            left_direction: None,
            right_direction: None,
        }
    }
}

pub fn path_point(v: &PathVertex) -> ObjectNode {
    ObjectNode::new("pathPoint")
        .with("anchor", paint_point(Point::new(v.x, v.y)))
        .with_opt("leftDirection", v.left_direction.map(paint_point))
        .with_opt("rightDirection", v.right_direction.map(paint_point))
}

pub fn subpath(vertices: &[PathVertex], closed: bool) -> ObjectNode {
    ObjectNode::new("subpathsList")
        .with("closedSubpath", closed)
        .with("points", vertices.iter().map(path_point).collect::<Vec<_>>())
}

/// One additive path component holding every subpath, in order.
pub fn compound_shape(subpaths: Vec<ObjectNode>) -> ObjectNode {
    let component = ObjectNode::new("pathComponent")
        .with("shapeOperation", Descriptor::enumerated("shapeOperation", "add"))
        .with("subpathListKey", subpaths);
    ObjectNode::new("pathClass").with("pathComponents", vec![component])
}

/// A single-subpath `pathClass` shape.
pub fn path_shape(vertices: &[PathVertex], closed: bool) -> ObjectNode {
    compound_shape(vec![subpath(vertices, closed)])
}

/// `rectangle` or `ellipse` shape from a bounding box. Rectangles carry the
/// four corner radii.
pub fn bounded_shape(class: &str, bounds: Bounds, corner_radius: Option<f64>) -> ObjectNode {
    let mut shape = ObjectNode::new(class)
        .with("unitValueQuadVersion", 1)
        .with("top", UnitValue::pixels(bounds.top))
        .with("left", UnitValue::pixels(bounds.left))
        .with("bottom", UnitValue::pixels(bounds.bottom))
        .with("right", UnitValue::pixels(bounds.right));
    if let Some(r) = corner_radius {
        for corner in ["topLeft", "topRight", "bottomLeft", "bottomRight"] {
            shape.insert(corner, UnitValue::pixels(r));
        }
    }
    shape
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: RgbColor,
    pub width: f64,
    /// Lines are stroke-only with round caps.
    pub open_line: bool,
}

pub fn stroke_style(stroke: Stroke) -> ObjectNode {
    let mut style = ObjectNode::new("strokeStyle")
        .with("strokeStyleVersion", 2)
        .with("strokeEnabled", true)
        .with("fillEnabled", !stroke.open_line)
        .with("strokeStyleLineWidth", UnitValue::pixels(stroke.width));
    if stroke.open_line {
        style.insert(
            "strokeStyleLineCap",
            Descriptor::enumerated("strokeStyleLineCap", "strokeStyleRoundCap"),
        );
    }
    style.with(
        "strokeStyleContent",
        ObjectNode::new("solidColorLayer").with("color", rgb(stroke.color)),
    )
}

/// `contentLayer` payload for a filled shape, with an optional stroke.
pub fn shape_layer(fill: RgbColor, shape: ObjectNode, stroke: Option<Stroke>) -> ObjectNode {
    ObjectNode::new("contentLayer")
        .with("type", ObjectNode::new("solidColorLayer").with("color", rgb(fill)))
        .with("shape", shape)
        .with_opt("strokeStyle", stroke.map(stroke_style))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rectangle_with_corners() {
        let json = serde_json::to_value(bounded_shape("rectangle", Bounds::default(), Some(8.0))).unwrap();
        assert_eq!(json["unitValueQuadVersion"], 1);
        assert_eq!(json["right"], json!({ "_unit": "pixelsUnit", "_value": 100.0 }));
        assert_eq!(json["bottomRight"]["_value"], 8.0);

        let ellipse = serde_json::to_value(bounded_shape("ellipse", Bounds::default(), None)).unwrap();
        assert!(ellipse.get("topLeft").is_none());
    }

    #[test]
    fn open_line_stroke_has_round_cap_and_no_fill() {
        let json = serde_json::to_value(stroke_style(Stroke {
            color: RgbColor::WHITE,
            width: 2.0,
            open_line: true,
        }))
        .unwrap();
        assert_eq!(json["fillEnabled"], false);
        assert_eq!(json["strokeStyleLineCap"]["_value"], "strokeStyleRoundCap");
        assert_eq!(json["strokeStyleContent"]["color"]["grain"], 255);
    }

    #[test]
    fn path_points_keep_handles() {
        let v = PathVertex {
            x: 1.0,
            y: 2.0,
            left_direction: Some(Point::new(0.0, 2.0)),
            right_direction: None,
        };
        let json = serde_json::to_value(path_shape(&[v], true)).unwrap();
        let sub = &json["pathComponents"][0]["subpathListKey"][0];
        assert_eq!(sub["closedSubpath"], true);
        assert_eq!(sub["points"][0]["anchor"]["vertical"]["_value"], 2.0);
        assert!(sub["points"][0].get("leftDirection").is_some());
        assert!(sub["points"][0].get("rightDirection").is_none());
    }

    #[test]
    fn compound_shape_keeps_subpath_order() {
        let open = subpath(&[Point::new(0.0, 0.0).into(), Point::new(5.0, 0.0).into()], false);
        let closed = subpath(&[Point::new(9.0, 9.0).into()], true);
        let json = serde_json::to_value(compound_shape(vec![open, closed])).unwrap();
        let subs = json["pathComponents"][0]["subpathListKey"].as_array().unwrap();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0]["closedSubpath"], false);
        assert_eq!(subs[1]["points"][0]["anchor"]["horizontal"]["_value"], 9.0);
    }
}
