//! # Failover Decisions
//!
//! What a single pass over the candidate list concluded ([`Action`]) and how the run ended
//! once that conclusion was acted upon ([`RunOutcome`]).

use std::fmt;
use std::net::Ipv4Addr;

use crate::error::RouteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NoOp(NoOpReason),
    SwitchTo(Ipv4Addr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// The first working candidate is already the default gateway.
    AlreadyActive(Ipv4Addr),
    /// No candidate works. The existing default route is left in place.
    NoneReachable,
}

/// The three steps of a default route replacement, in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStep {
    DeleteDefault,
    AddDefault,
    FlushCache,
}

impl fmt::Display for MutationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationStep::DeleteDefault => f.write_str("delete default route"),
            MutationStep::AddDefault => f.write_str("add default route"),
            MutationStep::FlushCache => f.write_str("flush route cache"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Unchanged {
        gateway: Ipv4Addr,
    },
    Switched {
        from: Option<Ipv4Addr>,
        to: Ipv4Addr,
    },
    /// At least one step of the switch failed. The next run re-evaluates from scratch.
    SwitchIncomplete {
        from: Option<Ipv4Addr>,
        to: Ipv4Addr,
        error: RouteError,
    },
    /// Dry run: the switch that would have been applied.
    WouldSwitch {
        from: Option<Ipv4Addr>,
        to: Ipv4Addr,
    },
    NoGatewayAvailable {
        current: Option<Ipv4Addr>,
    },
}

impl RunOutcome {
    pub fn attempted_switch(&self) -> bool {
        matches!(
            self,
            RunOutcome::Switched { .. } | RunOutcome::SwitchIncomplete { .. }
        )
    }
}
