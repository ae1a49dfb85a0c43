//! Routing table commands, issued through `ip route`.
//!
//! Each method runs exactly one command and converts its output into a typed reply.

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use gwfailover_common::error::CommandError;
use gwfailover_common::network::route::HostRouteReply;
use gwfailover_common::system::{CommandOutput, CommandRunner};

const IP: &str = "ip";

#[derive(Clone)]
pub struct RouteTable {
    runner: Arc<dyn CommandRunner>,
    timeout: Option<Duration>,
}

impl RouteTable {
    pub fn new(runner: Arc<dyn CommandRunner>, timeout: Option<Duration>) -> Self {
        Self { runner, timeout }
    }

    async fn ip_route(&self, args: &[&str]) -> Result<CommandOutput, CommandError> {
        let args: Vec<String> = std::iter::once("route")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        self.runner.run(IP, &args, self.timeout).await
    }

    pub async fn read_default_route(&self) -> Result<String, CommandError> {
        Ok(self.ip_route(&["show", "default"]).await?.text)
    }

    pub async fn add_host_route(
        &self,
        dest: Ipv4Addr,
        via: Ipv4Addr,
    ) -> Result<HostRouteReply, CommandError> {
        let output = self
            .ip_route(&["add", &dest.to_string(), "via", &via.to_string()])
            .await?;
        Ok(HostRouteReply::from_output(&output))
    }

    /// Best effort, failures are only logged.
    pub async fn remove_host_route(&self, dest: Ipv4Addr) {
        match self.ip_route(&["del", &dest.to_string()]).await {
            Ok(output) if output.success => {}
            Ok(output) => debug!("Test route to {dest} not removed: {}", output.text.trim()),
            Err(e) => warn!("Test route to {dest} not removed: {e}"),
        }
    }

    pub async fn delete_default_route(&self) -> Result<(), String> {
        step_result(self.ip_route(&["del", "default"]).await)
    }

    pub async fn add_default_route(&self, via: Ipv4Addr) -> Result<(), String> {
        step_result(
            self.ip_route(&["add", "default", "via", &via.to_string()])
                .await,
        )
    }

    pub async fn flush_route_cache(&self) -> Result<(), String> {
        step_result(self.ip_route(&["flush", "cache"]).await)
    }
}

fn step_result(result: Result<CommandOutput, CommandError>) -> Result<(), String> {
    match result {
        Ok(output) if output.success => Ok(()),
        Ok(output) => {
            let text = output.text.trim();
            Err(if text.is_empty() {
                "command exited with an error".to_string()
            } else {
                text.to_string()
            })
        }
        Err(e) => Err(e.to_string()),
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
