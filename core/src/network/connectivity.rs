//! Single-try connectivity probes against the test target.

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use gwfailover_common::network::probe::{ProbeMethod, ProbeReply};
use gwfailover_common::system::CommandRunner;

/// Added on top of the tool's own timeout before the process is killed.
const KILL_GRACE: Duration = Duration::from_secs(1);

#[derive(Clone)]
pub struct Connectivity {
    runner: Arc<dyn CommandRunner>,
    method: ProbeMethod,
    port: u16,
    dns_query: String,
}

impl Connectivity {
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        method: ProbeMethod,
        port: u16,
        dns_query: impl Into<String>,
    ) -> Self {
        Self {
            runner,
            method,
            port,
            dns_query: dns_query.into(),
        }
    }

    pub async fn probe(&self, target: Ipv4Addr, timeout: Duration) -> ProbeReply {
        match self.method {
            ProbeMethod::Tcp => self.tcp_probe(target, timeout).await,
            ProbeMethod::Dns => self.dns_probe(target, timeout).await,
        }
    }

    /// `nc -zv -w <secs> <target> <port>`
    pub async fn tcp_probe(&self, target: Ipv4Addr, timeout: Duration) -> ProbeReply {
        let secs = whole_seconds(timeout);
        let args: Vec<String> = vec![
            "-zv".to_string(),
            "-w".to_string(),
            secs.to_string(),
            target.to_string(),
            self.port.to_string(),
        ];

        match self
            .runner
            .run(ProbeMethod::Tcp.tool(), &args, Some(Duration::from_secs(secs) + KILL_GRACE))
            .await
        {
            Ok(output) => ProbeReply::from_tcp_output(&output),
            Err(e) => {
                debug!("TCP probe of {target}:{} failed: {e}", self.port);
                ProbeReply::Failed
            }
        }
    }

    /// `dig +time=<secs> +tries=1 @<target> <query>`
    pub async fn dns_probe(&self, target: Ipv4Addr, timeout: Duration) -> ProbeReply {
        let secs = whole_seconds(timeout);
        let args: Vec<String> = vec![
            format!("+time={secs}"),
            "+tries=1".to_string(),
            format!("@{target}"),
            self.dns_query.clone(),
        ];

        match self
            .runner
            .run(ProbeMethod::Dns.tool(), &args, Some(Duration::from_secs(secs) + KILL_GRACE))
            .await
        {
            Ok(output) => ProbeReply::from_dns_output(&output),
            Err(e) => {
                debug!("DNS probe of {target} failed: {e}");
                ProbeReply::Failed
            }
        }
    }
}

/// Both tools take whole seconds, and zero means "no timeout" to them. Partial seconds round
/// up so the tool never gives up earlier than asked.
fn whole_seconds(timeout: Duration) -> u64 {
    let secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
    secs.max(1)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
