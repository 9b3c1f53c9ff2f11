#![allow(clippy::needless_pass_by_value)]

//! Vector shape layers. Every tool is one `make contentLayer` whose payload
//! carries a solid fill, the shape geometry and an optional stroke.

use crate::build::path::{
    bounded_shape, compound_shape, path_shape, shape_layer, stroke_style, subpath, PathVertex,
    Stroke,
};
use crate::descriptor::{action, Batch, Descriptor, ObjectNode};
use crate::error::BridgeError;
use crate::host::Host;
use crate::model::geometry::{arrow_head, regular_polygon};
use crate::model::{Bounds, Point, RgbColor};
use crate::registry::params::{
    ArrowParams, CustomPathParams, EllipseParams, LineParams, PolygonParams, RectangleParams,
};
use crate::registry::validation::{validate_count, validate_positive, validate_range};
use crate::registry::ToolOutput;
use crate::scope::Precondition;

use super::common::submit;

fn make_shape(
    host: &mut dyn Host,
    tool: &str,
    fill: RgbColor,
    shape: ObjectNode,
    stroke: Option<Stroke>,
) -> Result<(), BridgeError> {
    let node = action::make("contentLayer", shape_layer(fill, shape, stroke))?;
    submit(host, tool, Precondition::ActiveDocument, Batch::single(node))?;
    Ok(())
}

/// A closed-shape stroke, present only with a color and a positive width.
fn outline(color: Option<RgbColor>, width: f64) -> Result<Option<Stroke>, BridgeError> {
    validate_range(width, 0.0, 1000.0, "strokeWidth")?;
    Ok(color.filter(|_| width > 0.0).map(|color| Stroke {
        color,
        width,
        open_line: false,
    }))
}

fn validate_bounds(bounds: Bounds) -> Result<(), BridgeError> {
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return Err(BridgeError::validation(format!(
            "bounds must have positive width and height (got {}x{})",
            bounds.width(),
            bounds.height()
        )));
    }
    Ok(())
}

pub fn rectangle(host: &mut dyn Host, p: RectangleParams) -> Result<ToolOutput, BridgeError> {
    validate_bounds(p.bounds)?;
    validate_range(p.corner_radius, 0.0, 10000.0, "cornerRadius")?;
    let stroke = outline(p.stroke_color, p.stroke_width)?;
    let shape = bounded_shape("rectangle", p.bounds, Some(p.corner_radius));
    make_shape(host, "drawRectangleShape", p.fill_color, shape, stroke)?;
    Ok(ToolOutput::unit(format!(
        "Drew {}x{} rectangle.",
        p.bounds.width(),
        p.bounds.height()
    )))
}

pub fn ellipse(host: &mut dyn Host, p: EllipseParams) -> Result<ToolOutput, BridgeError> {
    validate_bounds(p.bounds)?;
    let stroke = outline(p.stroke_color, p.stroke_width)?;
    let shape = bounded_shape("ellipse", p.bounds, None);
    make_shape(host, "drawEllipseShape", p.fill_color, shape, stroke)?;
    Ok(ToolOutput::unit(format!(
        "Drew {}x{} ellipse.",
        p.bounds.width(),
        p.bounds.height()
    )))
}

/// An open two-point path. The fill takes the stroke color so the layer
/// thumbnail matches the line.
pub fn line(host: &mut dyn Host, p: LineParams) -> Result<ToolOutput, BridgeError> {
    validate_positive(p.stroke_width, "strokeWidth")?;
    let vertices = [PathVertex::from(p.start_point), PathVertex::from(p.end_point)];
    let stroke = Stroke {
        color: p.stroke_color,
        width: p.stroke_width,
        open_line: true,
    };
    make_shape(
        host,
        "drawLineShape",
        p.stroke_color,
        path_shape(&vertices, false),
        Some(stroke),
    )?;
    Ok(ToolOutput::unit(format!(
        "Drew line from ({}, {}) to ({}, {}).",
        p.start_point.x, p.start_point.y, p.end_point.x, p.end_point.y
    )))
}

/// An open shaft from the start to the base of a closed triangular head.
/// Fill and stroke both take the stroke color.
pub fn arrow(host: &mut dyn Host, p: ArrowParams) -> Result<ToolOutput, BridgeError> {
    validate_positive(p.stroke_width, "strokeWidth")?;
    validate_positive(p.head_size, "headSize")?;
    let (base, head) = arrow_head(p.start_point, p.end_point, p.head_size);
    let shaft = [PathVertex::from(p.start_point), PathVertex::from(base)];
    let head = head.map(PathVertex::from);
    let shape = compound_shape(vec![subpath(&shaft, false), subpath(&head, true)]);
    let style = stroke_style(Stroke {
        color: p.stroke_color,
        width: p.stroke_width,
        open_line: false,
    })
    .with(
        "strokeStyleLineCap",
        Descriptor::enumerated("strokeStyleLineCap", "strokeStyleRoundCap"),
    );
    let payload = shape_layer(p.stroke_color, shape, None).with("strokeStyle", style);
    let node = action::make("contentLayer", payload)?;
    submit(host, "drawArrowShape", Precondition::ActiveDocument, Batch::single(node))?;
    Ok(ToolOutput::unit(format!(
        "Drew arrow from ({}, {}) to ({}, {}).",
        p.start_point.x, p.start_point.y, p.end_point.x, p.end_point.y
    )))
}

pub fn polygon(host: &mut dyn Host, p: PolygonParams) -> Result<ToolOutput, BridgeError> {
    validate_count(p.sides, 3, 100, "sides")?;
    validate_positive(p.radius, "radius")?;
    let stroke = outline(p.stroke_color, p.stroke_width)?;
    let vertices: Vec<PathVertex> =
        regular_polygon(Point::new(p.center_x, p.center_y), p.radius, p.sides)
            .into_iter()
            .map(PathVertex::from)
            .collect();
    make_shape(
        host,
        "drawPolygonShape",
        p.fill_color,
        path_shape(&vertices, true),
        stroke,
    )?;
    Ok(ToolOutput::unit(format!("Drew {}-sided polygon.", p.sides)))
}

pub fn custom_path(host: &mut dyn Host, p: CustomPathParams) -> Result<ToolOutput, BridgeError> {
    if p.points.len() < 2 {
        return Err(BridgeError::validation(format!(
            "points needs at least 2 anchors (got {})",
            p.points.len()
        )));
    }
    let stroke = outline(p.stroke_color, p.stroke_width)?;
    make_shape(
        host,
        "drawCustomPath",
        p.fill_color,
        path_shape(&p.points, p.closed),
        stroke,
    )?;
    Ok(ToolOutput::unit(format!(
        "Drew {} path through {} points.",
        if p.closed { "closed" } else { "open" },
        p.points.len()
    )))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::super::fixtures::{host, last_node, run};
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn rectangle_always_carries_corner_radii() {
        let mut h = host();
        run(&mut h, "drawRectangleShape", json!({})).unwrap();
        let node = last_node(&h);
        assert_eq!(node["_obj"], "make");
        assert_eq!(node["_target"][0]["_ref"], "contentLayer");
        let using = &node["using"];
        assert_eq!(using["type"]["color"]["blue"], 255);
        assert_eq!(using["shape"]["topLeft"]["_value"], 0.0);
        assert!(using.get("strokeStyle").is_none());
    }

    #[test]
    fn stroke_needs_color_and_width() {
        let mut h = host();
        run(
            &mut h,
            "drawEllipseShape",
            json!({ "strokeColor": { "red": 0, "green": 0, "blue": 0 } }),
        )
        .unwrap();
        assert!(last_node(&h)["using"].get("strokeStyle").is_none());

        run(
            &mut h,
            "drawEllipseShape",
            json!({ "strokeColor": { "red": 0, "green": 0, "blue": 0 }, "strokeWidth": 3 }),
        )
        .unwrap();
        let style = &last_node(&h)["using"]["strokeStyle"];
        assert_eq!(style["fillEnabled"], true);
        assert_eq!(style["strokeStyleLineWidth"]["_value"], 3.0);
    }

    #[test]
    fn line_is_an_open_stroked_path() {
        let mut h = host();
        run(&mut h, "drawLineShape", json!({ "strokeColor": { "red": 9, "green": 9, "blue": 9 } })).unwrap();
        let using = &last_node(&h)["using"];
        let sub = &using["shape"]["pathComponents"][0]["subpathListKey"][0];
        assert_eq!(sub["closedSubpath"], false);
        assert_eq!(sub["points"].as_array().unwrap().len(), 2);
        assert_eq!(using["type"]["color"]["red"], 9);
        assert_eq!(using["strokeStyle"]["fillEnabled"], false);
    }

    #[test]
    fn polygon_sides_are_bounded() {
        let mut h = host();
        run(&mut h, "drawPolygonShape", json!({ "sides": 5 })).unwrap();
        let sub = &last_node(&h)["using"]["shape"]["pathComponents"][0]["subpathListKey"][0];
        assert_eq!(sub["points"].as_array().unwrap().len(), 5);
        assert_eq!(sub["closedSubpath"], true);

        let err = run(&mut h, "drawPolygonShape", json!({ "sides": 2 })).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn custom_path_keeps_handles_and_needs_two_points() {
        let mut h = host();
        run(
            &mut h,
            "drawCustomPath",
            json!({
                "points": [
                    { "x": 0, "y": 0, "rightDirection": { "x": 20, "y": 0 } },
                    { "x": 100, "y": 100 }
                ]
            }),
        )
        .unwrap();
        let points = &last_node(&h)["using"]["shape"]["pathComponents"][0]["subpathListKey"][0]["points"];
        assert!(points[0].get("rightDirection").is_some());
        assert!(points[1].get("rightDirection").is_none());

        let err = run(&mut h, "drawCustomPath", json!({ "points": [{ "x": 1, "y": 1 }] })).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        let err = run(&mut h, "drawCustomPath", json!({})).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn empty_bounds_are_rejected() {
        let mut h = host();
        let err = run(
            &mut h,
            "drawRectangleShape",
            json!({ "bounds": { "top": 10, "left": 10, "bottom": 10, "right": 50 } }),
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(h.submitted().is_empty());
    }

    #[test]
    fn arrow_is_shaft_plus_closed_head() {
        let mut h = host();
        run(
            &mut h,
            "drawArrowShape",
            json!({
                "startPoint": { "x": 0, "y": 50 },
                "endPoint": { "x": 100, "y": 50 },
                "strokeColor": { "red": 200, "green": 10, "blue": 10 },
                "headSize": 20
            }),
        )
        .unwrap();
        let node = last_node(&h);
        assert_eq!(node["_target"][0]["_ref"], "contentLayer");
        let using = &node["using"];
        let subs = using["shape"]["pathComponents"][0]["subpathListKey"].as_array().unwrap();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0]["closedSubpath"], false);
        assert_eq!(subs[0]["points"][1]["anchor"]["horizontal"]["_value"], 80.0);
        assert_eq!(subs[1]["closedSubpath"], true);
        let head = subs[1]["points"].as_array().unwrap();
        assert_eq!(head.len(), 3);
        assert_eq!(head[0]["anchor"]["horizontal"]["_value"], 100.0);
        assert_eq!(head[1]["anchor"]["vertical"]["_value"], 60.0);
        assert_eq!(head[2]["anchor"]["vertical"]["_value"], 40.0);

        assert_eq!(using["type"]["color"]["red"], 200);
        let style = &using["strokeStyle"];
        assert_eq!(style["fillEnabled"], true);
        assert_eq!(style["strokeStyleLineCap"]["_value"], "strokeStyleRoundCap");
        assert_eq!(style["strokeStyleLineWidth"]["_value"], 2.0);
    }

    #[test]
    fn arrow_head_size_must_be_positive() {
        let mut h = host();
        let err = run(&mut h, "drawArrowShape", json!({ "headSize": 0 })).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(h.submitted().is_empty());
    }
}
