//! End-to-end runs of the failover service against a simulated host.
