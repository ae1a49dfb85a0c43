use std::fmt;
use std::net::Ipv4Addr;
use std::time::Duration;

use thiserror::Error;

use crate::decision::MutationStep;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{program}` did not finish within {}s", .after.as_secs_f64())]
    TimedOut { program: String, after: Duration },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FailoverError {
    #[error("no gateway candidates were given")]
    NoCandidates,
    #[error("command `{tool}` is not available")]
    ToolUnavailable { tool: String },
}

/// One step of the default route replacement that did not go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub step: MutationStep,
    pub reason: String,
}

impl fmt::Display for StepFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.step, self.reason)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error(
        "switching the default gateway to {gateway} was incomplete: {}",
        join_failures(.failures)
    )]
    Incomplete {
        gateway: Ipv4Addr,
        failures: Vec<StepFailure>,
    },
}

fn join_failures(failures: &[StepFailure]) -> String {
    failures
        .iter()
        .map(|failure| failure.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}
