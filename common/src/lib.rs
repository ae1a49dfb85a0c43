//! # gwfailover common
//!
//! Domain types and outbound ports shared by the core engine and the CLI.
//!
//! * **[`network`]**: gateway candidates, reachability verdicts and the parsers that turn
//!   routing/prober output into typed replies.
//! * **[`system`]**: the [`system::CommandRunner`] port every OS interaction goes through.
//! * **[`decision`]**: what a failover pass decided and what it did about it.
//! * **[`config`]**: run configuration assembled by the CLI.
//! * **[`error`]**: error kinds surfaced by the core.
//! * **[`progress`]**: hooks for reporting probe progress to a user interface.

pub mod config;
pub mod decision;
pub mod error;
pub mod macros;
pub mod network;
pub mod progress;
pub mod system;
