#![cfg(test)]
use std::sync::Arc;

use gwfailover_common::config::Config;
use gwfailover_common::decision::{MutationStep, RunOutcome};
use gwfailover_common::error::{FailoverError, RouteError};
use gwfailover_common::network::gateway::candidates_from;
use gwfailover_common::network::probe::ProbeMethod;
use gwfailover_core::service::FailoverService;

use crate::utils::{FakeHost, ip};

const TEST_ROUTE_ADD: &str = "ip route add 91.189.91.39 via";
const TEST_ROUTE_DEL: &str = "ip route del 91.189.91.39";

async fn run(
    host: &Arc<FakeHost>,
    gateways: &[&str],
    cfg: Config,
) -> Result<RunOutcome, FailoverError> {
    let service = FailoverService::new(host.clone(), cfg);
    service.run(&candidates_from(gateways.iter().copied())).await
}

fn mutations(host: &FakeHost) -> Vec<String> {
    host.calls()
        .into_iter()
        .filter(|call| {
            call == "ip route del default"
                || call.starts_with("ip route add default")
                || call == "ip route flush cache"
        })
        .collect()
}

/// Two uplinks, the preferred one is refused as invalid and the backup is already in use.
#[tokio::test]
async fn backup_in_use_and_working_is_left_alone() {
    let host = Arc::new(
        FakeHost::new(Some("192.168.1.1"))
            .invalid(&["10.0.0.1"])
            .working(&["192.168.1.1"]),
    );

    let outcome = run(&host, &["10.0.0.1", "192.168.1.1"], Config::default()).await.unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Unchanged {
            gateway: ip("192.168.1.1")
        }
    );
    assert!(mutations(&host).is_empty());
    assert_eq!(host.default_gateway(), Some(ip("192.168.1.1")));
}

#[tokio::test]
async fn priority_is_respected() {
    let host = Arc::new(FakeHost::new(Some("10.0.0.1")).working(&["10.0.0.3", "10.0.0.4"]));

    let outcome = run(
        &host,
        &["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4"],
        Config::default(),
    )
    .await
    .unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Switched {
            from: Some(ip("10.0.0.1")),
            to: ip("10.0.0.3")
        }
    );
    assert_eq!(host.default_gateway(), Some(ip("10.0.0.3")));
}

#[tokio::test]
async fn repeated_runs_are_stable() {
    let host = Arc::new(FakeHost::new(Some("10.0.0.2")).working(&["10.0.0.1", "10.0.0.2"]));
    let gateways = ["10.0.0.1", "10.0.0.2"];

    let first = run(&host, &gateways, Config::default()).await.unwrap();
    let mutations_after_first = mutations(&host).len();
    let second = run(&host, &gateways, Config::default()).await.unwrap();

    assert_eq!(
        first,
        RunOutcome::Switched {
            from: Some(ip("10.0.0.2")),
            to: ip("10.0.0.1")
        }
    );
    assert_eq!(
        second,
        RunOutcome::Unchanged {
            gateway: ip("10.0.0.1")
        }
    );
    assert_eq!(mutations(&host).len(), mutations_after_first);
}

#[tokio::test]
async fn total_failure_keeps_the_existing_route() {
    let host = Arc::new(FakeHost::new(Some("10.0.0.2")).invalid(&["10.0.0.1"]));

    let outcome = run(&host, &["10.0.0.1", "10.0.0.2"], Config::default()).await.unwrap();

    assert_eq!(
        outcome,
        RunOutcome::NoGatewayAvailable {
            current: Some(ip("10.0.0.2"))
        }
    );
    assert!(host.calls_starting_with("ip route del default").is_empty());
    assert_eq!(host.default_gateway(), Some(ip("10.0.0.2")));
}

#[tokio::test]
async fn switch_is_delete_add_flush() {
    let host = Arc::new(FakeHost::new(Some("10.0.0.2")).working(&["10.0.0.1"]));

    run(&host, &["10.0.0.1"], Config::default()).await.unwrap();

    assert_eq!(
        mutations(&host),
        vec![
            "ip route del default",
            "ip route add default via 10.0.0.1",
            "ip route flush cache",
        ]
    );
}

/// The uplink went down and took its default route with it.
#[tokio::test]
async fn switch_without_a_current_gateway_is_complete() {
    let host = Arc::new(FakeHost::new(None).working(&["10.0.0.2"]));

    let outcome = run(&host, &["10.0.0.1", "10.0.0.2"], Config::default())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Switched {
            from: None,
            to: ip("10.0.0.2")
        }
    );
    assert_eq!(
        mutations(&host),
        vec![
            "ip route del default",
            "ip route add default via 10.0.0.2",
            "ip route flush cache",
        ]
    );
    assert_eq!(host.default_gateway(), Some(ip("10.0.0.2")));
}

#[tokio::test]
async fn failed_add_without_a_current_gateway_is_incomplete() {
    let host = Arc::new(
        FakeHost::new(None)
            .working(&["10.0.0.1"])
            .failing("ip route add default"),
    );

    let outcome = run(&host, &["10.0.0.1"], Config::default()).await.unwrap();

    let RunOutcome::SwitchIncomplete { from: None, error, .. } = outcome else {
        panic!("Expected an incomplete switch, got {outcome:?}");
    };
    let RouteError::Incomplete { failures, .. } = error;
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].step, MutationStep::AddDefault);
    assert_eq!(host.default_gateway(), None);
}

#[tokio::test]
async fn every_probed_candidate_gets_one_cleanup() {
    let host = Arc::new(
        FakeHost::new(None)
            .invalid(&["10.0.0.1"])
            .working(&["10.0.0.3"]),
    );

    run(&host, &["10.0.0.1", "10.0.0.2", "10.0.0.3"], Config::default()).await.unwrap();

    assert_eq!(host.calls_starting_with(TEST_ROUTE_ADD).len(), 3);
    assert_eq!(host.calls_starting_with(TEST_ROUTE_DEL).len(), 3);
    assert_eq!(host.test_route(), None);
}

#[tokio::test]
async fn lower_priority_candidates_are_not_probed() {
    let host = Arc::new(FakeHost::new(None).working(&["10.0.0.2", "10.0.0.3"]));

    run(&host, &["10.0.0.1", "10.0.0.2", "10.0.0.3"], Config::default()).await.unwrap();

    assert_eq!(
        host.calls_starting_with(TEST_ROUTE_ADD),
        vec![
            "ip route add 91.189.91.39 via 10.0.0.1",
            "ip route add 91.189.91.39 via 10.0.0.2",
        ]
    );
}

#[tokio::test]
async fn missing_probe_tool_stops_before_probing() {
    let host = Arc::new(FakeHost::new(Some("10.0.0.1")).without_tool("nc"));

    let result = run(&host, &["10.0.0.1"], Config::default()).await;

    assert_eq!(result, Err(FailoverError::ToolUnavailable { tool: "nc".to_string() }));
    assert!(host.calls().is_empty());
}

#[tokio::test]
async fn empty_candidate_list_is_rejected() {
    let host = Arc::new(FakeHost::new(Some("10.0.0.1")));

    let result = run(&host, &[], Config::default()).await;

    assert_eq!(result, Err(FailoverError::NoCandidates));
    assert!(host.calls().is_empty());
}

#[tokio::test]
async fn malformed_candidate_does_not_stop_the_run() {
    let host = Arc::new(FakeHost::new(Some("10.0.0.9")).working(&["10.0.0.2"]));

    let outcome = run(&host, &["10.0.0.300", "10.0.0.2"], Config::default())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Switched {
            from: Some(ip("10.0.0.9")),
            to: ip("10.0.0.2")
        }
    );
    assert_eq!(host.calls_starting_with(TEST_ROUTE_ADD).len(), 1);
}

#[tokio::test]
async fn failed_step_is_reported_and_the_rest_still_runs() {
    let host = Arc::new(
        FakeHost::new(Some("10.0.0.2"))
            .working(&["10.0.0.1"])
            .failing("ip route flush cache"),
    );

    let outcome = run(&host, &["10.0.0.1"], Config::default()).await.unwrap();

    let RunOutcome::SwitchIncomplete { from, to, error } = outcome else {
        panic!("Expected an incomplete switch, got {outcome:?}");
    };
    assert_eq!(from, Some(ip("10.0.0.2")));
    assert_eq!(to, ip("10.0.0.1"));
    let RouteError::Incomplete { failures, .. } = error;
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].step, MutationStep::FlushCache);
    assert_eq!(host.default_gateway(), Some(ip("10.0.0.1")));
}

#[tokio::test]
async fn failed_delete_still_attempts_add_and_flush() {
    let host = Arc::new(
        FakeHost::new(Some("10.0.0.2"))
            .working(&["10.0.0.1"])
            .failing("ip route del default"),
    );

    let outcome = run(&host, &["10.0.0.1"], Config::default()).await.unwrap();

    assert!(outcome.attempted_switch());
    assert_eq!(mutations(&host).len(), 3);
    // The old route was never removed, so the add collided with it
    assert_eq!(host.default_gateway(), Some(ip("10.0.0.2")));
}

#[tokio::test]
async fn dry_run_leaves_the_route_alone() {
    let host = Arc::new(FakeHost::new(Some("10.0.0.2")).working(&["10.0.0.1", "10.0.0.2"]));
    let cfg = Config {
        dry_run: true,
        ..Config::default()
    };

    let outcome = run(&host, &["10.0.0.1", "10.0.0.2"], cfg).await.unwrap();

    assert_eq!(
        outcome,
        RunOutcome::WouldSwitch {
            from: Some(ip("10.0.0.2")),
            to: ip("10.0.0.1")
        }
    );
    assert!(mutations(&host).is_empty());
}

#[tokio::test]
async fn dns_probe_method() {
    let host = Arc::new(
        FakeHost::new(Some("10.0.0.1"))
            .working(&["10.0.0.2"])
            .without_tool("nc"),
    );
    let cfg = Config {
        probe_method: ProbeMethod::Dns,
        ..Config::default()
    };

    let outcome = run(&host, &["10.0.0.1", "10.0.0.2"], cfg).await.unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Switched {
            from: Some(ip("10.0.0.1")),
            to: ip("10.0.0.2")
        }
    );
    assert!(host.calls_starting_with("nc").is_empty());
    assert_eq!(host.calls_starting_with("dig").len(), 2);
}

#[tokio::test]
async fn custom_test_target_and_port() {
    let host = Arc::new(FakeHost::new(None).working(&["10.0.0.1"]));
    let cfg = Config {
        test_target: ip("1.1.1.1"),
        probe_port: 443,
        ..Config::default()
    };

    run(&host, &["10.0.0.1"], cfg).await.unwrap();

    assert_eq!(
        host.calls_starting_with("ip route add 1.1.1.1"),
        vec!["ip route add 1.1.1.1 via 10.0.0.1"]
    );
    assert_eq!(host.calls_starting_with("nc"), vec!["nc -zv -w 1 1.1.1.1 443"]);
}
