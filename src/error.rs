use serde::Serialize;
use thiserror::Error;

use crate::descriptor::DescriptorError;
use crate::host::HostError;

/// Structured error type for every stage of a tool invocation. Callers match on
/// `code` rather than parsing messages.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "code", content = "detail")]
pub enum BridgeError {
    /// A symbolic target (layer, channel, document) did not resolve.
    #[error("{what} not found")]
    NotFound { what: String },
    /// Required document state is missing; nothing was submitted.
    #[error("Requires {requirement}")]
    Precondition { requirement: String },
    #[error("No active document")]
    NoDocument,
    #[error("{message}")]
    Validation { message: String },
    #[error("Malformed descriptor: {0}")]
    Descriptor(#[from] DescriptorError),
    /// The host refused a batch; nodes after `index` were not applied.
    #[error("Host rejected batch at node {index}: {message}")]
    Rejected { index: usize, message: String },
    #[error("Host unavailable: {message}")]
    HostUnavailable { message: String },
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },
}

impl BridgeError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn precondition(requirement: impl Into<String>) -> Self {
        Self::Precondition {
            requirement: requirement.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::Resolution,
            Self::Precondition { .. } | Self::NoDocument => ErrorKind::Precondition,
            Self::Validation { .. } | Self::Descriptor(_) => ErrorKind::Validation,
            Self::Rejected { .. } => ErrorKind::Rejected,
            Self::HostUnavailable { .. } => ErrorKind::Transient,
            Self::UnknownTool { .. } => ErrorKind::UnknownTool,
        }
    }
}

impl From<HostError> for BridgeError {
    fn from(e: HostError) -> Self {
        match e {
            HostError::Rejected { index, message } => Self::Rejected { index, message },
            HostError::Unavailable { message } => Self::HostUnavailable { message },
            HostError::NoDocument => Self::NoDocument,
        }
    }
}

/// Coarse classification of a failure, stable across host versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnknownTool,
    Validation,
    Resolution,
    Precondition,
    Rejected,
    Transient,
}

/// Caller-facing error shape. Host-internal error objects never leak through;
/// only their message survives.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{tool}: {message}")]
pub struct ToolError {
    pub tool: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl ToolError {
    pub fn new(tool: impl Into<String>, error: &BridgeError) -> Self {
        Self {
            tool: tool.into(),
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    /// Process exit code for the CLI. Unknown tools are configuration errors and
    /// are kept distinct from handler failures.
    pub fn exit_code(&self) -> i32 {
        match self.kind {
            ErrorKind::UnknownTool => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn host_errors_map_onto_taxonomy() {
        let rejected: BridgeError = HostError::Rejected {
            index: 2,
            message: "bad class".into(),
        }
        .into();
        assert_eq!(rejected.kind(), ErrorKind::Rejected);

        let down: BridgeError = HostError::Unavailable {
            message: "service offline".into(),
        }
        .into();
        assert_eq!(down.kind(), ErrorKind::Transient);
    }

    #[test]
    fn tool_error_keeps_message_only() {
        let err = ToolError::new("mergeDown", &BridgeError::not_found("Layer 42"));
        assert_eq!(err.to_string(), "mergeDown: Layer 42 not found");
        assert_eq!(err.kind, ErrorKind::Resolution);
        assert_eq!(err.exit_code(), 1);

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["tool"], "mergeDown");
        assert_eq!(json["kind"], "resolution");
    }

    #[test]
    fn unknown_tool_has_distinct_exit_code() {
        let err = ToolError::new(
            "nope",
            &BridgeError::UnknownTool {
                name: "nope".into(),
            },
        );
        assert_eq!(err.exit_code(), 2);
    }
}
