pub mod run;

use std::net::Ipv4Addr;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use gwfailover_common::config::{
    Config, DEFAULT_DNS_QUERY, DEFAULT_PROBE_PORT, DEFAULT_TEST_TARGET,
};
use gwfailover_common::network::probe::ProbeMethod;

#[derive(Parser)]
#[command(name = "gwfailover")]
#[command(version)]
#[command(about = "Keeps the default route on the most preferred working gateway.")]
#[command(
    long_about = "Keeps the default route on the most preferred working gateway.\n\n\
                  Probes each gateway in the given order and switches the default route to the \
                  first one that reaches the test target. Meant to be run periodically by an \
                  external scheduler, one run at a time."
)]
pub struct CommandLine {
    /// Gateway addresses, most preferred first
    #[arg(short, long, required = true, num_args = 1.., value_name = "IP")]
    pub gateways: Vec<String>,

    /// Public host reached through each gateway while it is tested
    #[arg(short, long, value_name = "IP", default_value_t = DEFAULT_TEST_TARGET)]
    pub test_target: Ipv4Addr,

    /// Port used by the TCP probe
    #[arg(short, long, default_value_t = DEFAULT_PROBE_PORT)]
    pub port: u16,

    /// Probe timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// How a gateway is probed
    #[arg(short, long, value_enum, default_value_t = Method::Tcp)]
    pub method: Method,

    /// Name resolved against the test target by the DNS probe
    #[arg(long, value_name = "NAME", default_value = DEFAULT_DNS_QUERY)]
    pub query: String,

    /// Give up on routing table commands after this many seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub command_timeout: Option<u64>,

    /// Decide, but leave the default route alone
    #[arg(long)]
    pub dry_run: bool,

    /// Print less (-q hides the header, -qq also hides per-gateway progress)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Print more (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// TCP connect with nc
    Tcp,
    /// DNS query with dig
    Dns,
}

impl From<Method> for ProbeMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Tcp => ProbeMethod::Tcp,
            Method::Dns => ProbeMethod::Dns,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            test_target: self.test_target,
            probe_port: self.port,
            probe_timeout: Duration::from_secs(self.timeout),
            probe_method: self.method.into(),
            dns_query: self.query.clone(),
            command_timeout: self.command_timeout.map(Duration::from_secs),
            dry_run: self.dry_run,
            quiet: self.quiet,
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
