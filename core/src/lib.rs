//! # gwfailover core
//!
//! The failover engine. Components, leaf first:
//!
//! * [`routes::RouteInspector`]: reads the installed default gateway.
//! * [`reachability::ReachabilityProbe`]: tests one candidate end to end.
//! * [`failover::FailoverDecider`]: picks the first working candidate.
//! * [`routes::RouteMutator`]: replaces the default route.
//!
//! [`service::FailoverService`] wires them together for a single run. Every host interaction
//! goes through a [`gwfailover_common::system::CommandRunner`]; [`system::SystemRunner`] is the
//! process-backed one.

pub mod failover;
pub mod network;
pub mod reachability;
pub mod routes;
pub mod service;
pub mod system;

#[cfg(test)]
mod testing;
