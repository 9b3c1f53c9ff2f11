use crate::descriptor::{ObjectNode, RefChain};
use crate::model::RgbColor;

/// `{_obj: "RGBColor", red, grain, blue}`. The host spells green `grain`.
pub fn rgb(color: RgbColor) -> ObjectNode {
    ObjectNode::new("RGBColor")
        .with("red", color.red)
        .with("grain", color.green)
        .with("blue", color.blue)
}

/// `[{_ref: "color", _property: "foregroundColor"}]`
pub fn foreground() -> RefChain {
    RefChain::property("color", "foregroundColor")
}

pub fn background() -> RefChain {
    RefChain::property("color", "backgroundColor")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn green_is_written_as_grain() {
        let node = rgb(RgbColor::rgb(10, 20, 30));
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({ "_obj": "RGBColor", "red": 10, "grain": 20, "blue": 30 })
        );
    }
}
