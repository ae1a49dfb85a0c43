use std::net::Ipv4Addr;
use std::time::Duration;

use crate::network::probe::ProbeMethod;

/// Public host the candidates are tested against.
pub const DEFAULT_TEST_TARGET: Ipv4Addr = Ipv4Addr::new(91, 189, 91, 39);
pub const DEFAULT_PROBE_PORT: u16 = 80;
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(1);
pub const DEFAULT_DNS_QUERY: &str = "google.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Host reached through each candidate while it is being tested.
    pub test_target: Ipv4Addr,
    /// TCP port used by the connect probe.
    pub probe_port: u16,
    /// Upper bound of a single connectivity probe. One try, no retries.
    pub probe_timeout: Duration,
    pub probe_method: ProbeMethod,
    /// Name resolved against the test target when probing with DNS.
    pub dns_query: String,
    /// Bound applied to routing table commands.
    ///
    /// `None` leaves them unbounded.
    pub command_timeout: Option<Duration>,
    /// Decide without touching the default route.
    pub dry_run: bool,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            test_target: DEFAULT_TEST_TARGET,
            probe_port: DEFAULT_PROBE_PORT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            probe_method: ProbeMethod::Tcp,
            dns_query: DEFAULT_DNS_QUERY.to_string(),
            command_timeout: None,
            dry_run: false,
            quiet: 0,
        }
    }
}
