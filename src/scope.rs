//! Guarded, ordered submission of one tool invocation's batches.

use serde_json::Value;
use tracing::debug;

use crate::descriptor::{action, Batch, RefChain};
use crate::error::BridgeError;
use crate::host::Host;
use crate::model::{Document, Workspace};
use crate::resolve::{self, TargetHandle, TargetKind, TargetRef};

/// Document state a tool needs before anything is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    ActiveDocument,
    /// Implies an active document.
    ActiveSelection,
}

/// Exclusive, single-invocation access to the host.
///
/// Created by [`with_scope`]. The first failed submission poisons the scope:
/// every later `submit` returns that same error without reaching the host.
pub struct Scope<'h> {
    host: &'h mut dyn Host,
    tool: String,
    workspace: Workspace,
    deferred: Vec<Batch>,
    submissions: usize,
    failure: Option<BridgeError>,
}

impl<'h> Scope<'h> {
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// The snapshot taken at scope entry, or at the last [`Scope::refresh`].
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn document(&self) -> Result<&Document, BridgeError> {
        self.workspace.active().ok_or(BridgeError::NoDocument)
    }

    pub fn resolve(&self, kind: TargetKind, target: &TargetRef) -> Result<TargetHandle, BridgeError> {
        resolve::resolve(&self.workspace, kind, target)
    }

    pub fn resolve_layer(&self, target: &TargetRef) -> Result<TargetHandle, BridgeError> {
        self.resolve(TargetKind::Layer, target)
    }

    /// Resolve an optional layer identifier and make it active. `None` leaves
    /// the active layer alone.
    pub fn target_layer(
        &mut self,
        target: Option<&TargetRef>,
    ) -> Result<Option<TargetHandle>, BridgeError> {
        let Some(target) = target else {
            return Ok(None);
        };
        let handle = self.resolve_layer(target)?;
        self.select_layer(&handle)?;
        Ok(Some(handle))
    }

    /// Submit the select sub-batch for a layer handle. Must run before any
    /// batch that mutates "the active layer".
    pub fn select_layer(&mut self, handle: &TargetHandle) -> Result<(), BridgeError> {
        let id = match (handle.kind, handle.id) {
            (TargetKind::Layer, Some(id)) => id,
            _ => {
                return Err(BridgeError::validation(format!(
                    "{} \"{}\" is not a layer",
                    handle.kind, handle.name
                )))
            }
        };
        let node = action::select(RefChain::layer_id(id))
            .with("makeVisible", false)
            .with("layerID", vec![id]);
        self.submit(Batch::single(node))?;
        Ok(())
    }

    /// Hand `batch` to the host and return its result records.
    pub fn submit(&mut self, batch: Batch) -> Result<Vec<Value>, BridgeError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        let result = batch
            .validate()
            .map_err(BridgeError::from)
            .and_then(|()| {
                debug!(
                    tool = %self.tool,
                    seq = self.submissions,
                    nodes = batch.len(),
                    "submitting batch"
                );
                self.submissions += 1;
                self.host.submit(&batch).map_err(BridgeError::from)
            });
        if let Err(err) = &result {
            self.failure = Some(err.clone());
        }
        result
    }

    /// Queue a batch to run after the body succeeds, e.g. restoring the
    /// previously active tool.
    pub fn defer(&mut self, batch: Batch) {
        self.deferred.push(batch);
    }

    /// Take a fresh workspace snapshot, typically after a batch that creates a
    /// layer.
    pub fn refresh(&mut self) -> Result<&Workspace, BridgeError> {
        self.workspace = self.host.workspace()?;
        Ok(&self.workspace)
    }

    fn check(&self, precondition: Precondition) -> Result<(), BridgeError> {
        let doc = self.document()?;
        match precondition {
            Precondition::ActiveDocument => Ok(()),
            Precondition::ActiveSelection if doc.has_selection => Ok(()),
            Precondition::ActiveSelection => Err(BridgeError::precondition("an active selection")),
        }
    }

    fn finish(&mut self) -> Result<(), BridgeError> {
        for batch in std::mem::take(&mut self.deferred) {
            self.submit(batch)?;
        }
        Ok(())
    }
}

/// Run `body` with exclusive access to `host` for the duration of one tool
/// invocation.
///
/// The workspace is snapshotted on entry and `precondition` checked against it
/// before anything is submitted. Deferred batches run only if `body` returns
/// `Ok`.
pub fn with_scope<T>(
    host: &mut dyn Host,
    tool: &str,
    precondition: Option<Precondition>,
    body: impl FnOnce(&mut Scope<'_>) -> Result<T, BridgeError>,
) -> Result<T, BridgeError> {
    let workspace = host.workspace()?;
    let mut scope = Scope {
        host,
        tool: tool.to_string(),
        workspace,
        deferred: Vec::new(),
        submissions: 0,
        failure: None,
    };
    if let Some(precondition) = precondition {
        scope.check(precondition)?;
    }
    let value = body(&mut scope)?;
    scope.finish()?;
    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::descriptor::ObjectNode;
    use crate::host::{HostError, MemoryHost};
    use crate::model::Layer;

    fn host(selection: bool) -> MemoryHost {
        let mut doc = Document::new(1, "Poster")
            .with_layer(Layer::new(2, "Title"))
            .with_layer(Layer::new(1, "Background"));
        doc.has_selection = selection;
        MemoryHost::new(Workspace::single(doc))
    }

    fn grow() -> Batch {
        Batch::single(ObjectNode::new("grow"))
    }

    #[test]
    fn failed_precondition_submits_nothing() {
        let mut h = host(false);
        let err = with_scope(&mut h, "growSelection", Some(Precondition::ActiveSelection), |s| {
            s.submit(grow())
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Requires an active selection");
        assert!(h.submitted().is_empty());
    }

    #[test]
    fn no_document_fails_before_submission() {
        let mut h = MemoryHost::default();
        let err =
            with_scope(&mut h, "autoTone", Some(Precondition::ActiveDocument), |_| Ok(())).unwrap_err();
        assert_eq!(err, BridgeError::NoDocument);
        assert!(h.submitted().is_empty());
    }

    #[test]
    fn select_runs_before_main_batch() {
        let mut h = host(false);
        with_scope(&mut h, "applySharpen", Some(Precondition::ActiveDocument), |s| {
            s.target_layer(Some(&TargetRef::Name("Title".into())))?;
            s.submit(Batch::single(ObjectNode::new("sharpen")))
        })
        .unwrap();
        let sent = h.submitted_json();
        assert_eq!(sent[0][0]["_obj"], "select");
        assert_eq!(sent[0][0]["_target"][0]["_id"], 2);
        assert_eq!(sent[0][0]["layerID"][0], 2);
        assert_eq!(sent[1][0]["_obj"], "sharpen");
    }

    #[test]
    fn unresolved_layer_submits_nothing() {
        let mut h = host(false);
        let err = with_scope(&mut h, "applySharpen", None, |s| {
            s.target_layer(Some(&TargetRef::Id(99)))?;
            s.submit(grow())
        })
        .unwrap_err();
        assert!(matches!(err, BridgeError::NotFound { .. }));
        assert!(h.submitted().is_empty());
    }

    #[test]
    fn first_failure_poisons_the_scope() {
        let mut h = host(true);
        h.fail_next(HostError::Rejected {
            index: 0,
            message: "nope".into(),
        });
        let err = with_scope(&mut h, "grow", None, |s| {
            let first = s.submit(grow());
            assert!(first.is_err());
            s.submit(grow())
        })
        .unwrap_err();
        assert!(matches!(err, BridgeError::Rejected { index: 0, .. }));
        assert_eq!(h.submitted().len(), 1);
    }

    #[test]
    fn deferred_batches_run_last_and_only_on_success() {
        let mut h = host(false);
        with_scope(&mut h, "eraserStroke", None, |s| {
            s.defer(Batch::single(ObjectNode::new("restore")));
            s.submit(Batch::single(ObjectNode::new("paint")))
        })
        .unwrap();
        let tags: Vec<_> = h
            .submitted()
            .iter()
            .map(|b| b.nodes()[0].type_tag().unwrap().to_string())
            .collect();
        assert_eq!(tags, ["paint", "restore"]);

        let mut h = host(false);
        let _ = with_scope(&mut h, "eraserStroke", None, |s| -> Result<(), BridgeError> {
            s.defer(Batch::single(ObjectNode::new("restore")));
            Err(BridgeError::validation("bad points"))
        });
        assert!(h.submitted().is_empty());
    }

    #[test]
    fn untagged_roots_are_rejected_locally() {
        let mut h = host(false);
        let err = with_scope(&mut h, "raw", None, |s| s.submit(Batch::single(ObjectNode::record())))
            .unwrap_err();
        assert!(matches!(err, BridgeError::Descriptor(_)));
        assert!(h.submitted().is_empty());
    }

    #[test]
    fn refresh_sees_host_changes() {
        let mut h = host(false);
        let mut next = h.current_workspace().clone();
        next.active_mut().unwrap().layers.insert(0, Layer::new(7, "Layer 1"));
        h.after_next_submit(next);
        with_scope(&mut h, "make", None, |s| {
            s.submit(grow())?;
            assert_eq!(s.refresh()?.active().unwrap().layer_count(), 3);
            Ok(())
        })
        .unwrap();
    }
}
