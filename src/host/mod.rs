//! The seam to the creative application.
//!
//! Everything the bridge knows about the host goes through [`Host`]: a
//! read-only [`Workspace`] snapshot and ordered batch submission.

pub mod memory;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::descriptor::Batch;
use crate::model::Workspace;

pub use memory::MemoryHost;

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "code", content = "detail")]
pub enum HostError {
    /// The host refused node `index`; nothing after it was applied.
    #[error("node {index} rejected: {message}")]
    Rejected { index: usize, message: String },
    #[error("host unavailable: {message}")]
    Unavailable { message: String },
    #[error("no document is open")]
    NoDocument,
}

/// The automation engine, driven synchronously one batch at a time.
pub trait Host {
    fn workspace(&self) -> Result<Workspace, HostError>;

    /// Execute `batch` in order and return one result record per node.
    fn submit(&mut self, batch: &Batch) -> Result<Vec<Value>, HostError>;
}

impl<H: Host + ?Sized> Host for Box<H> {
    fn workspace(&self) -> Result<Workspace, HostError> {
        (**self).workspace()
    }

    fn submit(&mut self, batch: &Batch) -> Result<Vec<Value>, HostError> {
        (**self).submit(batch)
    }
}
