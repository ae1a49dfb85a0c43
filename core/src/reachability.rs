//! # Reachability Probe
//!
//! Checks whether traffic sent through a candidate gateway actually reaches the test target:
//!
//! 1. **Routability**: a host route to the target is installed via the candidate. A gateway the
//!    kernel refuses as invalid is not probed any further.
//! 2. **Connectivity**: one short connectivity probe of the target, which now leaves through
//!    the candidate.
//! 3. **Cleanup**: the host route is removed, whatever happened before.

use std::net::Ipv4Addr;
use std::time::Duration;

use tracing::{debug, warn};

use gwfailover_common::config::Config;
use gwfailover_common::network::gateway::Reachability;
use gwfailover_common::network::probe::ProbeReply;
use gwfailover_common::network::route::HostRouteReply;

use crate::network::connectivity::Connectivity;
use crate::network::routing::RouteTable;

pub struct ReachabilityProbe {
    routes: RouteTable,
    connectivity: Connectivity,
    test_target: Ipv4Addr,
    timeout: Duration,
}

impl ReachabilityProbe {
    pub fn new(routes: RouteTable, connectivity: Connectivity, cfg: &Config) -> Self {
        Self {
            routes,
            connectivity,
            test_target: cfg.test_target,
            timeout: cfg.probe_timeout,
        }
    }

    /// Probes `gateway` against the configured test target.
    pub async fn check(&self, gateway: Ipv4Addr) -> Reachability {
        self.is_reachable(gateway, self.test_target, self.timeout)
            .await
    }

    /// A test route refused for any reason other than an invalid gateway (e.g. `File exists`
    /// from a leftover route) still probes, so the result reflects whatever route is in place.
    pub async fn is_reachable(
        &self,
        gateway: Ipv4Addr,
        test_target: Ipv4Addr,
        timeout: Duration,
    ) -> Reachability {
        let reachability = match self.routes.add_host_route(test_target, gateway).await {
            Ok(HostRouteReply::InvalidGateway) => {
                debug!("{gateway} was refused as an invalid gateway");
                Reachability::NotWorking
            }
            Ok(reply) => {
                if let HostRouteReply::Rejected(reason) = reply {
                    warn!("Test route via {gateway} was not installed: {reason}");
                }
                let probe = self.connectivity.probe(test_target, timeout).await;
                Reachability::from(probe == ProbeReply::Succeeded)
            }
            Err(e) => {
                warn!("Test route via {gateway} could not be requested: {e}");
                Reachability::NotWorking
            }
        };

        self.routes.remove_host_route(test_target).await;
        reachability
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
