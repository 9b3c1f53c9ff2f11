#![allow(clippy::needless_pass_by_value)]

use serde_json::Value;

use crate::descriptor::Batch;
use crate::error::BridgeError;
use crate::host::Host;
use crate::registry::params::ExecuteBatchPlayParams;
use crate::registry::ToolOutput;
use crate::scope::{with_scope, Precondition};

/// Parse and submit caller descriptors as one batch. The host's result
/// records come back unchanged.
pub fn execute_batch_play(
    host: &mut dyn Host,
    p: ExecuteBatchPlayParams,
) -> Result<ToolOutput, BridgeError> {
    if p.commands.is_empty() {
        return Err(BridgeError::validation("commands must not be empty"));
    }
    let batch = Batch::from_json(&Value::Array(p.commands))?;
    let count = batch.len();
    let results = with_scope(
        host,
        "executeBatchPlayCommand",
        Some(Precondition::ActiveDocument),
        |s| {
            s.target_layer(p.layer_id.as_ref())?;
            s.submit(batch)
        },
    )?;
    Ok(ToolOutput::data(
        format!("Executed {count} command(s)."),
        Value::Array(results),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::super::fixtures::host;
    use crate::error::ErrorKind;
    use crate::host::HostError;
    use crate::registry::dispatch::{dispatch, Command};
    use serde_json::json;

    #[test]
    fn passes_descriptors_through_and_returns_results() {
        let mut h = host();
        h.respond(vec![json!({ "layerID": 12 })]);
        let out = dispatch(
            &mut h,
            &Command::new(
                "executeBatchPlayCommand",
                json!({ "commands": [{ "_obj": "autoTone", "_target": [{ "_ref": "layer", "_enum": "ordinal", "_value": "targetEnum" }] }] }),
            ),
        )
        .unwrap();
        assert_eq!(out.data, json!([{ "layerID": 12 }]));
        let sent = h.submitted_json();
        assert_eq!(sent[0][0]["_obj"], "autoTone");
        assert_eq!(sent[0][0]["_target"][0]["_value"], "targetEnum");
    }

    #[test]
    fn selects_layer_first() {
        let mut h = host();
        dispatch(
            &mut h,
            &Command::new(
                "executeBatchPlayCommand",
                json!({ "layerId": "Sky", "commands": [{ "_obj": "invert" }] }),
            ),
        )
        .unwrap();
        let sent = h.submitted_json();
        assert_eq!(sent[0][0]["_obj"], "select");
        assert_eq!(sent[1][0]["_obj"], "invert");
    }

    #[test]
    fn command_flags_reach_the_host_in_order() {
        let mut h = host();
        let ripple = json!({
            "_obj": "ripple",
            "_target": [{ "_ref": "layer", "_index": 2 }],
            "amount": 100,
            "_isCommand": true,
            "_options": { "dialogOptions": "dontDisplay" }
        });
        dispatch(
            &mut h,
            &Command::new("executeBatchPlayCommand", json!({ "commands": [ripple.clone()] })),
        )
        .unwrap();
        assert_eq!(h.submitted_json()[0][0], ripple);
    }

    #[test]
    fn malformed_descriptors_never_reach_the_host() {
        let mut h = host();
        let err = dispatch(
            &mut h,
            &Command::new("executeBatchPlayCommand", json!({ "commands": [{ "noTag": 1 }] })),
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = dispatch(
            &mut h,
            &Command::new("executeBatchPlayCommand", json!({ "commands": [] })),
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(h.submitted().is_empty());
    }

    #[test]
    fn host_rejection_surfaces_as_rejected() {
        let mut h = host();
        h.fail_next(HostError::Rejected {
            index: 0,
            message: "The command \"bogus\" is not currently available.".into(),
        });
        let err = dispatch(
            &mut h,
            &Command::new("executeBatchPlayCommand", json!({ "commands": [{ "_obj": "bogus" }] })),
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Rejected);
        assert!(err.message.contains("bogus"));
    }
}
