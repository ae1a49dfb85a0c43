use crate::network::gateway::{GatewayCandidate, Reachability};

/// Receives progress while candidates are being probed.
///
/// Both hooks default to doing nothing.
pub trait ProbeObserver: Send + Sync {
    fn probe_started(&self, _candidate: &GatewayCandidate) {}

    fn probe_finished(&self, _candidate: &GatewayCandidate, _reachability: Reachability) {}
}

/// Observer for callers that do not report progress.
pub struct Silent;

impl ProbeObserver for Silent {}
