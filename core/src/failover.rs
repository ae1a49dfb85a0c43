//! # Failover Decision
//!
//! Walks the candidates in the order they were given and settles on the first one that works.
//! Lower-priority candidates after it are never probed. The decider does not rank, sort or
//! deduplicate: the caller's order is the priority.

use std::net::Ipv4Addr;
use std::sync::Arc;

use tracing::debug;

use gwfailover_common::decision::{Action, NoOpReason};
use gwfailover_common::error::FailoverError;
use gwfailover_common::network::gateway::{GatewayCandidate, Reachability};
use gwfailover_common::progress::{ProbeObserver, Silent};

use crate::reachability::ReachabilityProbe;

pub struct FailoverDecider {
    probe: ReachabilityProbe,
    observer: Arc<dyn ProbeObserver>,
}

impl FailoverDecider {
    pub fn new(probe: ReachabilityProbe) -> Self {
        Self {
            probe,
            observer: Arc::new(Silent),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ProbeObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub async fn decide(
        &self,
        candidates: &[GatewayCandidate],
        current: Option<Ipv4Addr>,
    ) -> Result<Action, FailoverError> {
        if candidates.is_empty() {
            return Err(FailoverError::NoCandidates);
        }

        for candidate in candidates {
            self.observer.probe_started(candidate);
            let reachability = self.evaluate(candidate).await;
            self.observer.probe_finished(candidate, reachability);

            if !reachability.is_working() {
                continue;
            }

            // A working candidate always has a valid address.
            let Some(gateway) = candidate.addr() else {
                continue;
            };

            if current == Some(gateway) {
                return Ok(Action::NoOp(NoOpReason::AlreadyActive(gateway)));
            }
            return Ok(Action::SwitchTo(gateway));
        }

        Ok(Action::NoOp(NoOpReason::NoneReachable))
    }

    async fn evaluate(&self, candidate: &GatewayCandidate) -> Reachability {
        match candidate.addr() {
            Some(gateway) => self.probe.check(gateway).await,
            None => {
                debug!("Candidate #{} {:?} is not an IPv4 address", candidate.rank, candidate.raw);
                Reachability::NotWorking
            }
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
