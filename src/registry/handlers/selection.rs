#![allow(clippy::needless_pass_by_value)]

use crate::build::color::rgb;
use crate::descriptor::{action, Batch, Descriptor, ObjectNode, RefChain, UnitValue};
use crate::error::BridgeError;
use crate::host::Host;
use crate::registry::params::{
    BorderSelectionParams, ChannelNameParams, ColorRangeParams, FeatherParams, FocusAreaParams,
    ModifySelectionParams, SaveSelectionParams, SmoothSelectionParams, TransformSelectionParams,
};
use crate::registry::validation::{validate_range, validate_text};
use crate::registry::ToolOutput;
use crate::resolve::TargetKind;
use crate::scope::{with_scope, Precondition};

use super::common::{select_all_node, selection_ref, submit};

/// Submit one node that needs an existing selection.
fn on_selection(host: &mut dyn Host, tool: &str, node: ObjectNode) -> Result<(), BridgeError> {
    submit(host, tool, Precondition::ActiveSelection, Batch::single(node))?;
    Ok(())
}

pub fn select_all(host: &mut dyn Host) -> Result<ToolOutput, BridgeError> {
    submit(
        host,
        "selectAll",
        Precondition::ActiveDocument,
        Batch::single(select_all_node()?),
    )?;
    Ok(ToolOutput::unit("Selected all."))
}

/// `minimum` and `maximum` are both the sample color; fuzziness widens it.
pub fn color_range(host: &mut dyn Host, p: ColorRangeParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.fuzziness, 0.0, 200.0, "fuzziness")?;
    let node = ObjectNode::new("colorRange")
        .with("fuzziness", p.fuzziness)
        .with("minimum", rgb(p.color))
        .with("maximum", rgb(p.color));
    submit(
        host,
        "selectColorRange",
        Precondition::ActiveDocument,
        Batch::single(node),
    )?;
    Ok(ToolOutput::unit(format!(
        "Selected colors near {} (fuzziness {}).",
        p.color.to_hex(),
        p.fuzziness
    )))
}

/// Select the in-focus region. Replaces any current selection.
pub fn focus_area(host: &mut dyn Host, p: FocusAreaParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.fuzziness, 0.0, 100.0, "fuzziness")?;
    let node = ObjectNode::new("focusArea").with("focusAreaParam", p.fuzziness);
    submit(host, "selectFocusArea", Precondition::ActiveDocument, Batch::single(node))?;
    Ok(ToolOutput::unit("Selected in-focus area."))
}

pub fn grow(host: &mut dyn Host) -> Result<ToolOutput, BridgeError> {
    on_selection(host, "growSelection", action::event("grow"))?;
    Ok(ToolOutput::unit("Grew selection."))
}

pub fn similar(host: &mut dyn Host) -> Result<ToolOutput, BridgeError> {
    on_selection(host, "similarSelection", action::event("similar"))?;
    Ok(ToolOutput::unit("Extended selection to similar pixels."))
}

/// Expand/contract amount. An explicit 0 means the 1px minimum.
fn modify_amount(pixels: f64) -> Result<f64, BridgeError> {
    let pixels = if pixels == 0.0 { 1.0 } else { pixels };
    validate_range(pixels, 1.0, 500.0, "pixels")?;
    Ok(pixels)
}

fn modify_by(tag: &str, pixels: f64) -> ObjectNode {
    ObjectNode::new(tag).with("by", UnitValue::pixels(pixels))
}

pub fn expand(host: &mut dyn Host, p: ModifySelectionParams) -> Result<ToolOutput, BridgeError> {
    let pixels = modify_amount(p.pixels)?;
    on_selection(host, "expandSelection", modify_by("expand", pixels))?;
    Ok(ToolOutput::unit(format!("Expanded selection by {pixels}px.")))
}

pub fn contract(host: &mut dyn Host, p: ModifySelectionParams) -> Result<ToolOutput, BridgeError> {
    let pixels = modify_amount(p.pixels)?;
    on_selection(host, "contractSelection", modify_by("contract", pixels))?;
    Ok(ToolOutput::unit(format!("Contracted selection by {pixels}px.")))
}

pub fn feather(host: &mut dyn Host, p: FeatherParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.pixels, 0.1, 1000.0, "pixels")?;
    let node = ObjectNode::new("feather").with("radius", UnitValue::pixels(p.pixels));
    on_selection(host, "featherSelection", node)?;
    Ok(ToolOutput::unit(format!("Feathered selection by {}px.", p.pixels)))
}

pub fn smooth(host: &mut dyn Host, p: SmoothSelectionParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.sample_radius, 1.0, 500.0, "sampleRadius")?;
    let node = ObjectNode::new("smoothness").with("radius", UnitValue::pixels(p.sample_radius));
    on_selection(host, "smoothSelection", node)?;
    Ok(ToolOutput::unit("Smoothed selection."))
}

pub fn border(host: &mut dyn Host, p: BorderSelectionParams) -> Result<ToolOutput, BridgeError> {
    validate_range(p.width, 1.0, 200.0, "width")?;
    let node = ObjectNode::new("border").with("width", UnitValue::pixels(p.width));
    on_selection(host, "borderSelection", node)?;
    Ok(ToolOutput::unit(format!("Bordered selection at {}px.", p.width)))
}

pub fn save_as_channel(
    host: &mut dyn Host,
    p: SaveSelectionParams,
) -> Result<ToolOutput, BridgeError> {
    validate_text(&p.channel_name, "channelName")?;
    let node = ObjectNode::new("duplicate")
        .with_target(selection_ref())
        .with("name", p.channel_name.as_str());
    on_selection(host, "saveSelectionAsChannel", node)?;
    Ok(ToolOutput::unit(format!(
        "Saved selection as channel \"{}\".",
        p.channel_name
    )))
}

pub fn load_from_channel(
    host: &mut dyn Host,
    p: ChannelNameParams,
) -> Result<ToolOutput, BridgeError> {
    let name = with_scope(
        host,
        "loadSelectionFromChannel",
        Some(Precondition::ActiveDocument),
        |s| {
            let channel = s.resolve(TargetKind::Channel, &p.channel_name)?;
            s.submit(Batch::single(action::set(
                selection_ref(),
                RefChain::named("channel", &channel.name),
            )?))?;
            Ok(channel.name)
        },
    )?;
    Ok(ToolOutput::unit(format!(
        "Loaded selection from channel \"{name}\"."
    )))
}

pub fn delete_channel(host: &mut dyn Host, p: ChannelNameParams) -> Result<ToolOutput, BridgeError> {
    let name = with_scope(host, "deleteChannel", Some(Precondition::ActiveDocument), |s| {
        let channel = s.resolve(TargetKind::Channel, &p.channel_name)?;
        let node =
            ObjectNode::new("delete").with_target(RefChain::named("channel", &channel.name));
        s.submit(Batch::single(node))?;
        Ok(channel.name)
    })?;
    Ok(ToolOutput::unit(format!("Deleted channel \"{name}\".")))
}

pub fn transform(
    host: &mut dyn Host,
    p: TransformSelectionParams,
) -> Result<ToolOutput, BridgeError> {
    validate_range(p.width, 1.0, 10000.0, "width")?;
    validate_range(p.height, 1.0, 10000.0, "height")?;
    validate_range(p.angle, -360.0, 360.0, "angle")?;
    let node = ObjectNode::new("transform")
        .with_target(selection_ref())
        .with(
            "freeTransformCenterState",
            Descriptor::enumerated("quadCenterState", "QCSAverage"),
        )
        .with("width", UnitValue::percent(p.width))
        .with("height", UnitValue::percent(p.height))
        .with("angle", UnitValue::angle(p.angle))
        .with(
            "interfaceIconFrameDimmed",
            Descriptor::enumerated("interpolationType", "bicubicAutomatic"),
        );
    on_selection(host, "transformSelection", node)?;
    Ok(ToolOutput::unit("Transformed selection."))
}
