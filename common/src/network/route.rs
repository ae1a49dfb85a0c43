//! # Routing Table Replies
//!
//! Parsers for the textual output of the routing table commands. Nothing outside this
//! module looks at raw `ip route` output.

use std::net::Ipv4Addr;
use std::sync::OnceLock;

use regex::Regex;

use crate::system::CommandOutput;

static DEFAULT_ROUTE_RE: OnceLock<Regex> = OnceLock::new();

fn default_route_re() -> &'static Regex {
    DEFAULT_ROUTE_RE.get_or_init(|| {
        Regex::new(r"(?m)^default via (\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}) dev\b")
            .expect("default route pattern is valid")
    })
}

/// Extracts the gateway of the first `default via <ipv4> dev ...` line.
///
/// Returns `None` when there is no default route or when the output has an unexpected shape.
pub fn parse_default_gateway(route_table: &str) -> Option<Ipv4Addr> {
    default_route_re()
        .captures(route_table)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<Ipv4Addr>().ok())
}

/// Answer of the routing table to a request for a host route through a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRouteReply {
    Installed,
    /// The candidate is not a plausible next hop (e.g. not on a connected subnet).
    InvalidGateway,
    /// Any other refusal, such as an already existing route or missing privileges.
    Rejected(String),
}

impl HostRouteReply {
    pub fn from_output(output: &CommandOutput) -> Self {
        if output.text.to_ascii_lowercase().contains("invalid gateway") {
            return HostRouteReply::InvalidGateway;
        }
        if output.success {
            HostRouteReply::Installed
        } else {
            HostRouteReply::Rejected(output.text.trim().to_string())
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
