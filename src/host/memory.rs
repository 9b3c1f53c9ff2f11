use std::collections::VecDeque;

use serde_json::{json, Value};

use super::{Host, HostError};
use crate::descriptor::Batch;
use crate::model::Workspace;

/// Recording fake host for dry runs and tests.
///
/// Every batch passed to [`Host::submit`] is kept, including ones the host
/// "rejects". Responses are taken from a script queue; when the queue is empty
/// each node answers with an empty record.
#[derive(Debug, Default)]
pub struct MemoryHost {
    workspace: Workspace,
    submitted: Vec<Batch>,
    responses: VecDeque<Result<Vec<Value>, HostError>>,
    next_workspace: Option<Workspace>,
    offline: bool,
}

impl MemoryHost {
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace,
            ..Self::default()
        }
    }

    /// Queue the result of the next unscripted submission.
    pub fn respond(&mut self, records: Vec<Value>) -> &mut Self {
        self.responses.push_back(Ok(records));
        self
    }

    pub fn fail_next(&mut self, error: HostError) -> &mut Self {
        self.responses.push_back(Err(error));
        self
    }

    /// Replace the workspace after the next successful submission, the way a
    /// `make` changes the layer stack.
    pub fn after_next_submit(&mut self, workspace: Workspace) -> &mut Self {
        self.next_workspace = Some(workspace);
        self
    }

    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    pub fn submitted(&self) -> &[Batch] {
        &self.submitted
    }

    pub fn submitted_json(&self) -> Value {
        Value::Array(self.submitted.iter().map(Batch::to_json).collect())
    }

    /// The last submitted batch.
    pub fn last(&self) -> Option<&Batch> {
        self.submitted.last()
    }

    pub fn current_workspace(&self) -> &Workspace {
        &self.workspace
    }

    fn unavailable() -> HostError {
        HostError::Unavailable {
            message: "host is offline".to_string(),
        }
    }
}

impl Host for MemoryHost {
    fn workspace(&self) -> Result<Workspace, HostError> {
        if self.offline {
            return Err(Self::unavailable());
        }
        Ok(self.workspace.clone())
    }

    fn submit(&mut self, batch: &Batch) -> Result<Vec<Value>, HostError> {
        if self.offline {
            return Err(Self::unavailable());
        }
        self.submitted.push(batch.clone());
        let records = match self.responses.pop_front() {
            Some(response) => response?,
            None => batch.iter().map(|_| json!({})).collect(),
        };
        if let Some(next) = self.next_workspace.take() {
            self.workspace = next;
        }
        Ok(records)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::descriptor::ObjectNode;
    use crate::model::Document;

    #[test]
    fn records_batches_and_defaults_to_empty_records() {
        let mut host = MemoryHost::new(Workspace::single(Document::new(1, "a")));
        let batch = Batch::new()
            .with(ObjectNode::new("autoTone"))
            .with(ObjectNode::new("autoColor"));
        let records = host.submit(&batch).unwrap();
        assert_eq!(records, vec![json!({}), json!({})]);
        assert_eq!(host.submitted().len(), 1);
    }

    #[test]
    fn scripted_failure_is_still_recorded() {
        let mut host = MemoryHost::default();
        host.fail_next(HostError::Rejected {
            index: 0,
            message: "bad".into(),
        });
        let err = host.submit(&Batch::single(ObjectNode::new("grow"))).unwrap_err();
        assert!(matches!(err, HostError::Rejected { index: 0, .. }));
        assert_eq!(host.submitted().len(), 1);
    }

    #[test]
    fn swaps_workspace_after_submit() {
        let mut host = MemoryHost::default();
        host.after_next_submit(Workspace::single(Document::new(9, "b")));
        assert!(host.workspace().unwrap().active().is_none());
        host.submit(&Batch::single(ObjectNode::new("make"))).unwrap();
        assert_eq!(host.workspace().unwrap().active().map(|d| d.id), Some(9));
    }

    #[test]
    fn offline_host_refuses_everything() {
        let mut host = MemoryHost::default();
        host.set_offline(true);
        assert!(host.workspace().is_err());
        assert!(host.submit(&Batch::new()).is_err());
        assert!(host.submitted().is_empty());
    }
}
