//! Layer-effect payloads, applied with one `set` on the active layer's
//! `layerEffects` property.

use super::vocab::BLEND_MODE;
use crate::descriptor::{action, DescriptorError, ObjectNode, RefChain, UnitValue};

/// An effect record switched on and visible in the host's dialog.
pub fn effect(tag: &str) -> ObjectNode {
    ObjectNode::new(tag)
        .with("enabled", true)
        .with("present", true)
        .with("showInDialog", true)
}

/// Adds `mode` from caller vocabulary.
pub fn with_blend(fx: ObjectNode, mode: &str) -> ObjectNode {
    fx.with("mode", BLEND_MODE.node(mode))
}

/// The linear contour used for `transferSpec` and `mappingShape`.
pub fn linear_contour() -> ObjectNode {
    ObjectNode::new("shapeCurveType").with("name", "Linear")
}

/// `layerEffects{<fx tag>: fx}`. Effects with no tag are skipped.
pub fn layer_effects(fx: ObjectNode) -> ObjectNode {
    let mut effects = ObjectNode::new("layerEffects");
    if let Some(tag) = fx.type_tag().map(str::to_string) {
        effects.insert(&tag, fx);
    }
    effects
}

/// Scale every effect at 100%.
pub fn full_scale(effects: ObjectNode) -> ObjectNode {
    effects.with("scale", UnitValue::percent(100.0))
}

/// `set layerEffects of the active layer`.
pub fn apply(effects: ObjectNode) -> Result<ObjectNode, DescriptorError> {
    action::set(RefChain::layer_effects(), effects)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn effect_is_keyed_by_its_tag() {
        let fx = with_blend(effect("solidFill"), "Multiply");
        let node = apply(full_scale(layer_effects(fx))).unwrap();
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["_target"][0]["_property"], "layerEffects");
        assert_eq!(json["_target"][1]["_ref"], "layer");
        assert_eq!(json["to"]["_obj"], "layerEffects");
        assert_eq!(json["to"]["solidFill"]["mode"]["_value"], "multiply");
        assert_eq!(json["to"]["solidFill"]["present"], true);
        assert_eq!(json["to"]["scale"]["_value"], 100.0);
    }

    #[test]
    fn mismatched_payload_is_refused() {
        let err = apply(ObjectNode::new("layer")).unwrap_err();
        assert!(matches!(err, DescriptorError::TagMismatch { .. }));
    }
}
