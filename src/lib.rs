//! psbridge: typed construction of host automation descriptors and a tool
//! registry that turns named invocations into guarded, ordered batches.
//!
//! The entry point is [`registry::dispatch::dispatch`]. Hosts implement
//! [`host::Host`]; [`host::MemoryHost`] records batches for dry runs and tests.

pub mod build;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod host;
pub mod model;
pub mod registry;
pub mod resolve;
pub mod scope;

pub use error::{BridgeError, ErrorKind, ToolError};
pub use registry::dispatch::{dispatch, Command, Session};
pub use registry::ToolOutput;
