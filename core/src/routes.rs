//! # Default Route Inspection and Replacement
//!
//! [`RouteInspector`] discovers which gateway the host uses right now, [`RouteMutator`]
//! replaces it.
//!
//! The replacement deletes the old default route before adding the new one, so between the
//! two steps the host has no default route at all. Adding first can collide with the existing
//! default entry on some routing stacks, which is why that window is accepted.

use std::net::Ipv4Addr;

use tracing::{debug, error, warn};

use gwfailover_common::decision::MutationStep;
use gwfailover_common::error::{RouteError, StepFailure};
use gwfailover_common::network::route;

use crate::network::routing::RouteTable;

pub struct RouteInspector {
    routes: RouteTable,
}

impl RouteInspector {
    pub fn new(routes: RouteTable) -> Self {
        Self { routes }
    }

    /// The installed default gateway.
    ///
    /// A missing default route, an unexpected output shape and a failed read all mean
    /// "no current gateway known".
    pub async fn current_gateway(&self) -> Option<Ipv4Addr> {
        match self.routes.read_default_route().await {
            Ok(table) => {
                let gateway = route::parse_default_gateway(&table);
                if gateway.is_none() {
                    debug!("No default gateway found in: {:?}", table.trim());
                }
                gateway
            }
            Err(e) => {
                warn!("Could not read the routing table: {e}");
                None
            }
        }
    }
}

pub struct RouteMutator {
    routes: RouteTable,
}

impl RouteMutator {
    pub fn new(routes: RouteTable) -> Self {
        Self { routes }
    }

    /// Deletes the default route, adds one via `gateway`, then flushes the route cache.
    ///
    /// Every step is attempted even if an earlier one failed. There is no rollback.
    /// `replacing` is the gateway read before the switch. Without one, the delete has nothing
    /// to remove and its failure is expected (the kernel drops the default route of an uplink
    /// that went down).
    pub async fn switch_default_gateway(
        &self,
        gateway: Ipv4Addr,
        replacing: Option<Ipv4Addr>,
    ) -> Result<(), RouteError> {
        let mut failures: Vec<StepFailure> = Vec::new();

        let steps = [
            (MutationStep::DeleteDefault, self.routes.delete_default_route().await),
            (MutationStep::AddDefault, self.routes.add_default_route(gateway).await),
            (MutationStep::FlushCache, self.routes.flush_route_cache().await),
        ];

        for (step, result) in steps {
            match result {
                Ok(()) => {}
                Err(reason) if step == MutationStep::DeleteDefault && replacing.is_none() => {
                    debug!("No default route to delete: {reason}");
                }
                Err(reason) => {
                    error!("Could not {step}: {reason}");
                    failures.push(StepFailure { step, reason });
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(RouteError::Incomplete { gateway, failures })
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
