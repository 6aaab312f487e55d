//! Scripting connection port interface

use std::io;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::scripting::{Command, Response};

/// Errors from the scripting connection
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("{path} does not exist. Ensure Audacity is running with mod-script-pipe enabled")]
    PipeMissing { path: String },

    #[error("Failed to open pipe {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Pipe I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("No response within {timeout_secs}s; is Audacity still responding?")]
    ResponseTimeout { timeout_secs: u64 },
}

/// Port for a request/response scripting channel to the external application.
///
/// The protocol is strictly alternating: one command out, one
/// blank-line-terminated response back. Commands are never pipelined.
#[async_trait]
pub trait ScriptConnection: Send {
    /// Send one command and block until its response arrives.
    async fn execute(&mut self, command: &Command) -> Result<Response, ScriptError>;
}
