use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use colored::*;
use tracing::{error, info, warn};

use crate::mprint;
use crate::terminal::{colors, print, progress::TerminalProgress};
use gwfailover_common::config::Config;
use gwfailover_common::decision::RunOutcome;
use gwfailover_common::network::gateway::{self, GatewayCandidate};
use gwfailover_common::network::probe::ProbeMethod;
use gwfailover_common::success;
use gwfailover_core::service::FailoverService;
use gwfailover_core::system::SystemRunner;

pub async fn run(gateways: Vec<String>, cfg: &Config) -> anyhow::Result<()> {
    if !is_root::is_root() {
        warn!("Not running as root, the routing table will most likely refuse changes");
    }

    let candidates: Vec<GatewayCandidate> = gateway::candidates_from(gateways);
    print_settings(&candidates, cfg);

    let start_time: Instant = Instant::now();
    let service = FailoverService::new(Arc::new(SystemRunner), cfg.clone())
        .with_observer(Arc::new(TerminalProgress::new(cfg.quiet)));

    let outcome: RunOutcome = service
        .run(&candidates)
        .await
        .context("failover run aborted")?;

    if cfg.quiet < 2 {
        mprint!();
    }
    report(&outcome);
    info!("Finished in {:.2}s", start_time.elapsed().as_secs_f64());
    print::end_of_program(cfg.quiet);
    Ok(())
}

fn print_settings(candidates: &[GatewayCandidate], cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let gateways: String = candidates
        .iter()
        .map(|candidate| candidate.to_string())
        .collect::<Vec<String>>()
        .join(" > ");
    let probe: String = match cfg.probe_method {
        ProbeMethod::Tcp => format!("tcp port {}", cfg.probe_port),
        ProbeMethod::Dns => format!("dns query {}", cfg.dns_query),
    };

    print::aligned_line("Gateways", gateways.color(colors::GATEWAY_ADDR));
    print::aligned_line("Test target", cfg.test_target);
    print::aligned_line("Probe", format!("{probe}, {}s timeout", cfg.probe_timeout.as_secs()));
    if cfg.dry_run {
        print::aligned_line("Mode", "dry run".yellow());
    }
    mprint!();
}

fn report(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Unchanged { gateway } => {
            success!("{gateway} is the current gateway and it is working, nothing will be changed");
        }
        RunOutcome::Switched { from, to } => {
            if let Some(from) = from {
                info!("Replaced default gateway {from}");
            }
            success!("Default gateway changed to {to}");
        }
        RunOutcome::SwitchIncomplete { to, error, .. } => {
            error!("{error}");
            warn!(
                "Default gateway change to {to} may not have taken effect, \
                 the next run will re-evaluate"
            );
        }
        RunOutcome::WouldSwitch { from, to } => match from {
            Some(from) => info!("Dry run: default gateway would change from {from} to {to}"),
            None => info!("Dry run: default gateway would be set to {to}"),
        },
        RunOutcome::NoGatewayAvailable { current } => {
            warn!("No working gateway found, nothing will be changed");
            if let Some(current) = current {
                warn!("Keeping the existing default route via {current}");
            }
        }
    }
}
