//! # Gateway Candidates
//!
//! A candidate is a configured next-hop address together with its priority rank.
//! The rank is the position in the list handed over by the user, `0` being the most
//! preferred gateway. Candidates are never re-ranked after loading.
//!
//! Addresses are kept as the raw text the user typed. A candidate that does not parse as an
//! IPv4 address is still a candidate, it simply can never be reachable.

use std::fmt;
use std::net::Ipv4Addr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayCandidate {
    pub rank: usize,
    pub raw: String,
}

impl GatewayCandidate {
    pub fn new(rank: usize, raw: impl Into<String>) -> Self {
        Self {
            rank,
            raw: raw.into(),
        }
    }

    /// The candidate address, if it is a syntactically valid IPv4 address.
    pub fn addr(&self) -> Option<Ipv4Addr> {
        self.raw.trim().parse::<Ipv4Addr>().ok()
    }
}

impl fmt::Display for GatewayCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw.trim())
    }
}

/// Builds the priority-ordered candidate list, preserving the input order.
pub fn candidates_from<I, S>(gateways: I) -> Vec<GatewayCandidate>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    gateways
        .into_iter()
        .enumerate()
        .map(|(rank, raw)| GatewayCandidate::new(rank, raw))
        .collect()
}

/// Outcome of probing one candidate against the test target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    Working,
    NotWorking,
}

impl Reachability {
    pub fn is_working(self) -> bool {
        matches!(self, Reachability::Working)
    }
}

impl From<bool> for Reachability {
    fn from(working: bool) -> Self {
        if working {
            Reachability::Working
        } else {
            Reachability::NotWorking
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
