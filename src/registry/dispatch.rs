use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, info_span, warn};

use super::{registry, ToolOutput};
use crate::error::{BridgeError, ToolError};
use crate::host::Host;

/// One tool invocation as the caller sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    #[serde(default)]
    pub options: Value,
}

impl Command {
    pub fn new(name: impl Into<String>, options: Value) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

/// Execute a command against the host.
/// This is the single entry point for every surface (library, CLI, relay).
pub fn dispatch(host: &mut dyn Host, cmd: &Command) -> Result<ToolOutput, ToolError> {
    let _span = info_span!("tool", name = %cmd.name).entered();

    let Some(entry) = registry().get(&cmd.name) else {
        warn!("unknown tool");
        return Err(ToolError::new(
            &cmd.name,
            &BridgeError::UnknownTool {
                name: cmd.name.clone(),
            },
        ));
    };

    let empty;
    let options = if cmd.options.is_null() {
        empty = Value::Object(serde_json::Map::new());
        &empty
    } else {
        &cmd.options
    };

    match (entry.handler)(host, options) {
        Ok(output) => {
            info!(category = entry.info.category.slug(), "tool succeeded");
            Ok(output)
        }
        Err(err) => {
            warn!(kind = ?err.kind(), error = %err, "tool failed");
            Err(ToolError::new(&cmd.name, &err))
        }
    }
}

/// Owns a host and serializes invocations against it.
///
/// The lock is held for a whole invocation, so batches from two callers never
/// interleave.
pub struct Session<H: Host> {
    host: Mutex<H>,
}

impl<H: Host> Session<H> {
    pub fn new(host: H) -> Self {
        Self {
            host: Mutex::new(host),
        }
    }

    pub fn run(&self, cmd: &Command) -> Result<ToolOutput, ToolError> {
        let mut host = self.host.lock();
        dispatch(&mut *host, cmd)
    }

    /// Inspect the host between invocations.
    pub fn with_host<T>(&self, f: impl FnOnce(&mut H) -> T) -> T {
        f(&mut self.host.lock())
    }

    pub fn into_inner(self) -> H {
        self.host.into_inner()
    }
}
