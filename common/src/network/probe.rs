//! # Connectivity Probe Replies
//!
//! Two probing strategies are supported:
//! * **TCP** through `nc`: a connect to the test target, success is reported as `succeeded`.
//! * **DNS** through `dig`: a query sent to the test target, any answer section counts.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::system::CommandOutput;

static DNS_ANSWER_RE: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeMethod {
    #[default]
    Tcp,
    Dns,
}

impl ProbeMethod {
    /// External tool the probe depends on.
    pub fn tool(self) -> &'static str {
        match self {
            ProbeMethod::Tcp => "nc",
            ProbeMethod::Dns => "dig",
        }
    }
}

impl fmt::Display for ProbeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeMethod::Tcp => f.write_str("tcp"),
            ProbeMethod::Dns => f.write_str("dns"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeReply {
    Succeeded,
    Failed,
}

impl ProbeReply {
    pub fn from_tcp_output(output: &CommandOutput) -> Self {
        if output.text.contains("succeeded") {
            ProbeReply::Succeeded
        } else {
            ProbeReply::Failed
        }
    }

    /// A reply carrying an answer section means the server was reached, even with zero answers.
    pub fn from_dns_output(output: &CommandOutput) -> Self {
        let re = DNS_ANSWER_RE.get_or_init(|| {
            Regex::new(r"\bANSWER: \d+").expect("dns answer pattern is valid")
        });
        if re.is_match(&output.text) {
            ProbeReply::Succeeded
        } else {
            ProbeReply::Failed
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
