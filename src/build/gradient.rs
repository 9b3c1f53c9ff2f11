use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::color::rgb;
use crate::descriptor::{Descriptor, ObjectNode, UnitValue};
use crate::model::RgbColor;

/// Full scale of a gradient stop location on the wire.
pub const LOCATION_SCALE: f64 = 4096.0;

/// Percent along the gradient [0, 100] → host fixed-point location [0, 4096].
/// Halves round toward +∞.
pub fn location_to_fixed(percent: f64) -> i64 {
    (percent * LOCATION_SCALE / 100.0 + 0.5).floor() as i64
}

/// A color stop as callers send it. `location` is a percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorStop {
    pub location: f64,
    #[serde(default)]
    pub color: RgbColor,
    #[serde(default = "default_midpoint")]
    pub midpoint: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpacityStop {
    pub location: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "default_midpoint")]
    pub midpoint: f64,
}

fn default_midpoint() -> f64 {
    50.0
}

fn default_opacity() -> f64 {
    100.0
}

impl ColorStop {
    pub const fn new(location: f64, color: RgbColor) -> Self {
        Self {
            location,
            color,
            midpoint: 50.0,
        }
    }
}

impl OpacityStop {
    pub const fn opaque(location: f64) -> Self {
        Self {
            location,
            opacity: 100.0,
            midpoint: 50.0,
        }
    }
}

/// Black at 0% to white at 100%.
pub fn black_to_white() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, RgbColor::BLACK),
        ColorStop::new(100.0, RgbColor::WHITE),
    ]
}

/// One fully opaque stop at each color stop's location.
pub fn opaque_at(colors: &[ColorStop]) -> Vec<OpacityStop> {
    colors.iter().map(|c| OpacityStop::opaque(c.location)).collect()
}

pub fn color_stop(stop: &ColorStop) -> ObjectNode {
    ObjectNode::new("colorStop")
        .with("color", rgb(stop.color))
        .with("location", location_to_fixed(stop.location))
        .with("midpoint", stop.midpoint)
        .with("type", Descriptor::enumerated("colorStopType", "userStop"))
}

pub fn transfer_spec(stop: &OpacityStop) -> ObjectNode {
    ObjectNode::new("transferSpec")
        .with("location", location_to_fixed(stop.location))
        .with("midpoint", stop.midpoint)
        .with("opacity", UnitValue::percent(stop.opacity))
}

/// A custom-stops `gradientClassEvent`. Gradient maps omit the name; every
/// other consumer calls it "Custom".
pub fn gradient(name: Option<&str>, colors: &[ColorStop], opacity: &[OpacityStop]) -> ObjectNode {
    ObjectNode::new("gradientClassEvent")
        .with("colors", colors.iter().map(color_stop).collect::<Vec<_>>())
        .with(
            "gradientForm",
            Descriptor::enumerated("gradientForm", "customStops"),
        )
        .with("interfaceIconFrameDimmed", LOCATION_SCALE)
        .with_opt("name", name)
        .with(
            "transparency",
            opacity.iter().map(transfer_spec).collect::<Vec<_>>(),
        )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn locations_scale_to_4096() {
        assert_eq!(location_to_fixed(0.0), 0);
        assert_eq!(location_to_fixed(50.0), 2048);
        assert_eq!(location_to_fixed(100.0), 4096);
        assert_eq!(location_to_fixed(25.0), 1024);
        // 0.0122% → 0.49971..., 0.0123% → 0.50381...
        assert_eq!(location_to_fixed(0.0122), 0);
        assert_eq!(location_to_fixed(0.0123), 1);
    }

    #[test]
    fn stops_deserialize_with_defaults() {
        let stops: Vec<ColorStop> =
            serde_json::from_str(r#"[{"location": 0}, {"location": 100, "color": {"red": 255, "green": 255, "blue": 255}}]"#)
                .unwrap();
        assert_eq!(stops[0].color, RgbColor::BLACK);
        assert_eq!(stops[0].midpoint, 50.0);
        assert_eq!(stops[1].color, RgbColor::WHITE);

        let o: OpacityStop = serde_json::from_str(r#"{"location": 30}"#).unwrap();
        assert_eq!(o.opacity, 100.0);
    }

    #[test]
    fn gradient_wire_form() {
        let colors = black_to_white();
        let json = serde_json::to_value(gradient(Some("Custom"), &colors, &opaque_at(&colors))).unwrap();
        assert_eq!(json["_obj"], "gradientClassEvent");
        assert_eq!(json["gradientForm"]["_value"], "customStops");
        assert_eq!(json["name"], "Custom");
        assert_eq!(json["colors"][1]["location"], 4096);
        assert_eq!(json["colors"][1]["color"]["grain"], 255);
        assert_eq!(json["colors"][0]["type"]["_value"], "userStop");
        assert_eq!(json["transparency"][0]["opacity"]["_unit"], "percentUnit");
        assert_eq!(json["transparency"][1]["location"], 4096);
    }

    #[test]
    fn unnamed_gradient_has_no_name_field() {
        let json = serde_json::to_value(gradient(None, &black_to_white(), &[])).unwrap();
        assert!(json.get("name").is_none());
        assert_eq!(json["transparency"], serde_json::json!([]));
    }
}
