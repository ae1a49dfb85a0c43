//! # System Command Port
//!
//! Every interaction with the host (routing table, probing tools) is an external command.
//! The core only sees this trait, the process-backed implementation lives in the core crate
//! and tests swap in scripted runners.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::CommandError;

/// Exit status and combined stdout/stderr of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub text: String,
}

impl CommandOutput {
    pub fn new(success: bool, text: impl Into<String>) -> Self {
        Self {
            success,
            text: text.into(),
        }
    }
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args` and waits for it to exit.
    ///
    /// A non-zero exit is not an error, it is reported through [`CommandOutput::success`].
    /// With a `timeout` the command is killed once it elapses.
    async fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Option<Duration>,
    ) -> Result<CommandOutput, CommandError>;

    /// Whether `program` can be started on this host.
    async fn is_available(&self, program: &str) -> bool;
}
