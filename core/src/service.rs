//! # Failover Service
//!
//! Implements one complete failover run.
//!
//! A run is a single pass with no memory of earlier runs: it rediscovers the current default
//! gateway, probes candidates until one works and changes the default route at most once.
//! Periodic execution is left to an external scheduler, which must not start a run while the
//! previous one is still going.

use std::sync::Arc;

use tracing::{debug, info};

use gwfailover_common::config::Config;
use gwfailover_common::decision::{Action, NoOpReason, RunOutcome};
use gwfailover_common::error::FailoverError;
use gwfailover_common::network::gateway::GatewayCandidate;
use gwfailover_common::progress::{ProbeObserver, Silent};
use gwfailover_common::system::CommandRunner;

use crate::failover::FailoverDecider;
use crate::network::connectivity::Connectivity;
use crate::network::routing::RouteTable;
use crate::reachability::ReachabilityProbe;
use crate::routes::{RouteInspector, RouteMutator};

/// Application Service for gateway failover.
///
/// Orchestrates a run by:
/// 1. checking that the probing tool exists.
/// 2. reading the current default gateway through the [`RouteInspector`].
/// 3. letting the [`FailoverDecider`] pick a gateway.
/// 4. applying a switch through the [`RouteMutator`], unless this is a dry run.
pub struct FailoverService {
    runner: Arc<dyn CommandRunner>,
    cfg: Config,
    observer: Arc<dyn ProbeObserver>,
}

impl FailoverService {
    pub fn new(runner: Arc<dyn CommandRunner>, cfg: Config) -> Self {
        Self {
            runner,
            cfg,
            observer: Arc::new(Silent),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ProbeObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub async fn run(&self, candidates: &[GatewayCandidate]) -> Result<RunOutcome, FailoverError> {
        if candidates.is_empty() {
            return Err(FailoverError::NoCandidates);
        }

        let tool = self.cfg.probe_method.tool();
        if !self.runner.is_available(tool).await {
            return Err(FailoverError::ToolUnavailable {
                tool: tool.to_string(),
            });
        }

        let routes = RouteTable::new(self.runner.clone(), self.cfg.command_timeout);
        let connectivity = Connectivity::new(
            self.runner.clone(),
            self.cfg.probe_method,
            self.cfg.probe_port,
            self.cfg.dns_query.clone(),
        );

        let current = RouteInspector::new(routes.clone()).current_gateway().await;
        match current {
            Some(gateway) => info!("Current default gateway is {gateway}"),
            None => info!("No default gateway is currently installed"),
        }

        let probe = ReachabilityProbe::new(routes.clone(), connectivity, &self.cfg);
        let decider = FailoverDecider::new(probe).with_observer(self.observer.clone());
        let action = decider.decide(candidates, current).await?;
        debug!("Decided on {action:?}");

        let outcome = match action {
            Action::NoOp(NoOpReason::AlreadyActive(gateway)) => RunOutcome::Unchanged { gateway },
            Action::NoOp(NoOpReason::NoneReachable) => RunOutcome::NoGatewayAvailable { current },
            Action::SwitchTo(to) if self.cfg.dry_run => {
                RunOutcome::WouldSwitch { from: current, to }
            }
            Action::SwitchTo(to) => {
                let mutator = RouteMutator::new(routes);
                match mutator.switch_default_gateway(to, current).await {
                    Ok(()) => RunOutcome::Switched { from: current, to },
                    Err(error) => RunOutcome::SwitchIncomplete {
                        from: current,
                        to,
                        error,
                    },
                }
            }
        };

        Ok(outcome)
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
