use colored::*;

use gwfailover_common::network::gateway::{GatewayCandidate, Reachability};
use gwfailover_common::progress::ProbeObserver;

use crate::terminal::{colors, print, spinner};

/// Narrates the probing of each gateway on the terminal.
pub struct TerminalProgress {
    quiet: u8,
}

impl TerminalProgress {
    pub fn new(quiet: u8) -> Self {
        Self { quiet }
    }
}

impl ProbeObserver for TerminalProgress {
    fn probe_started(&self, candidate: &GatewayCandidate) {
        if self.quiet < 2 {
            spinner::start(format!("Checking if gateway {candidate} works..."));
        }
    }

    fn probe_finished(&self, candidate: &GatewayCandidate, reachability: Reachability) {
        spinner::stop();
        if self.quiet >= 2 {
            return;
        }

        let verdict: ColoredString = match reachability {
            Reachability::Working => "yes".color(colors::WORKING).bold(),
            Reachability::NotWorking => "no".color(colors::NOT_WORKING).bold(),
        };
        print::print_status(format!(
            "[{}] Checking if gateway {} works... {}",
            candidate.rank.to_string().color(colors::ACCENT),
            candidate.to_string().color(colors::GATEWAY_ADDR),
            verdict
        ));
    }
}
