//! Checked constructors for root operation nodes.
//!
//! `make` and `set` verify that the payload's type tag agrees with what the
//! target names before the node ever reaches a batch.

use super::{Descriptor, DescriptorError, ObjectNode, RefChain, RefForm};

/// `{_obj: "make", _target: [{_ref: class}], using}`. The payload must be a
/// `class` object.
pub fn make(class: &str, using: ObjectNode) -> Result<ObjectNode, DescriptorError> {
    expect_tag("make", class, &Descriptor::Object(using.clone()))?;
    Ok(ObjectNode::new("make")
        .with_target(RefChain::class(class))
        .with("using", using))
}

/// `{_obj: "set", _target: target, to}`.
///
/// Targeting `{_ref: "property", _property: P}` requires a `P` payload, and
/// targeting a layer requires a `layer` payload. Reference payloads are never
/// checked.
pub fn set(target: RefChain, to: impl Into<Descriptor>) -> Result<ObjectNode, DescriptorError> {
    let to = to.into();
    if !matches!(to, Descriptor::Ref(_)) {
        if let Some(first) = target.first() {
            match (&*first.class, &first.form) {
                ("property", RefForm::Property(p)) => expect_tag("set", p, &to)?,
                ("layer", _) => expect_tag("set", "layer", &to)?,
                _ => {}
            }
        }
    }
    Ok(ObjectNode::new("set").with_target(target).with("to", to))
}

/// `{_obj: "select", _target: target}`
pub fn select(target: RefChain) -> ObjectNode {
    ObjectNode::new("select").with_target(target)
}

/// A bare operation with no target, e.g. `{_obj: "mergeVisible"}`.
pub fn event(tag: &str) -> ObjectNode {
    ObjectNode::new(tag)
}

/// An operation applied to the active layer.
pub fn on_target_layer(tag: &str) -> ObjectNode {
    event(tag).with_target(RefChain::target_layer())
}

fn expect_tag(action: &str, expected: &str, payload: &Descriptor) -> Result<(), DescriptorError> {
    let found = match payload {
        Descriptor::Object(o) => o.type_tag().unwrap_or("<untagged>"),
        Descriptor::Enum(_) => "<enum>",
        Descriptor::Class(_) => "<class>",
        Descriptor::Ref(_) => "<reference>",
        Descriptor::List(_) => "<list>",
        Descriptor::Scalar(_) => "<scalar>",
    };
    if found == expected {
        Ok(())
    } else {
        Err(DescriptorError::TagMismatch {
            action: action.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::descriptor::RefSegment;

    #[test]
    fn make_requires_matching_payload() {
        let ok = make("adjustmentLayer", ObjectNode::new("adjustmentLayer")).unwrap();
        assert_eq!(ok.type_tag(), Some("make"));
        assert!(ok.target().is_some());

        let err = make("contentLayer", ObjectNode::new("adjustmentLayer")).unwrap_err();
        assert_eq!(
            err,
            DescriptorError::TagMismatch {
                action: "make".into(),
                expected: "contentLayer".into(),
                found: "adjustmentLayer".into(),
            }
        );
    }

    #[test]
    fn set_on_property_requires_property_payload() {
        assert!(set(RefChain::layer_effects(), ObjectNode::new("layerEffects")).is_ok());
        assert!(set(RefChain::layer_effects(), ObjectNode::new("dropShadow")).is_err());
    }

    #[test]
    fn set_on_layer_requires_layer_payload() {
        assert!(set(RefChain::target_layer(), ObjectNode::new("layer")).is_ok());
        let err = set(RefChain::layer_id(3), ObjectNode::record()).unwrap_err();
        assert!(err.to_string().contains("<untagged>"));
    }

    #[test]
    fn set_with_reference_payload_is_unchecked() {
        let selection = RefChain::property("channel", "selection");
        let to = RefChain::new(vec![RefSegment::new("channel", RefForm::Name("Alpha 1".into()))]);
        assert!(set(selection, to).is_ok());
    }
}
