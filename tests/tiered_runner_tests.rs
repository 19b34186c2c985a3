//! Integration tests for the tiered test runner against real processes.
//!
//! These drive the engine through the system launcher with plain shell
//! commands so the exit-code plumbing is exercised end to end.

use std::sync::Arc;

use opskit::runner::{
    AttemptStatus, InvocationStrategy, SystemProcessLauncher, TieredTestRunner,
};

fn strategy(label: &str, program: &str, args: Vec<&str>) -> InvocationStrategy {
    InvocationStrategy::new(label, program, args)
}

fn exit_with(code: u32) -> InvocationStrategy {
    let mut shell = InvocationStrategy::new(&format!("exit-{}", code), "sh", vec!["-c"]);
    shell.args.push(format!("exit {}", code));
    shell
}

#[tokio::test]
async fn first_tier_success_runs_exactly_one_attempt() {
    let runner = TieredTestRunner::new(
        Arc::new(SystemProcessLauncher),
        vec![
            strategy("ok", "true", vec![]),
            strategy("unreached", "false", vec![]),
        ],
    );

    let report = runner.run().await;

    assert!(report.succeeded);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.attempts.len(), 1);
    assert_eq!(report.attempts[0].status, AttemptStatus::Success);
    assert_eq!(report.attempts[0].exit_code, Some(0));
}

#[tokio::test]
async fn failed_primary_falls_back_to_second_tier() {
    let runner = TieredTestRunner::new(
        Arc::new(SystemProcessLauncher),
        vec![
            strategy("fails", "false", vec![]),
            strategy("ok", "true", vec![]),
            strategy("unreached", "false", vec![]),
        ],
    );

    let report = runner.run().await;

    assert!(report.succeeded);
    assert_eq!(report.attempts.len(), 2);
    assert_eq!(report.attempts[0].status, AttemptStatus::TestFailure);
    assert_eq!(report.winning_attempt().unwrap().strategy, "ok");
}

#[tokio::test]
async fn exhausting_all_tiers_exits_one() {
    let runner = TieredTestRunner::new(
        Arc::new(SystemProcessLauncher),
        vec![exit_with(1), exit_with(3), exit_with(127)],
    );

    let report = runner.run().await;

    assert!(!report.succeeded);
    assert_eq!(report.exit_code(), 1);
    assert_eq!(report.attempts.len(), 3);
    assert_eq!(report.attempts[0].status, AttemptStatus::TestFailure);
    assert_eq!(report.attempts[1].status, AttemptStatus::TestFailure);
    // Exit 127 is how a shell reports a missing binary.
    assert_eq!(report.attempts[2].status, AttemptStatus::NotFound);
}

#[tokio::test]
async fn missing_binary_spawn_failure_falls_through() {
    let runner = TieredTestRunner::new(
        Arc::new(SystemProcessLauncher),
        vec![
            strategy("ghost", "definitely-not-a-real-binary-0451", vec![]),
            strategy("ok", "true", vec![]),
        ],
    );

    let report = runner.run().await;

    assert!(report.succeeded);
    assert_eq!(report.attempts.len(), 2);
    assert_eq!(report.attempts[0].status, AttemptStatus::NotFound);
    assert_eq!(report.attempts[0].exit_code, None);
}

#[tokio::test]
async fn degraded_third_tier_success_is_a_real_success() {
    let runner = TieredTestRunner::new(
        Arc::new(SystemProcessLauncher),
        vec![exit_with(127), exit_with(1), strategy("direct", "true", vec![])],
    );

    let report = runner.run().await;

    assert!(report.succeeded);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.attempts.len(), 3);
    assert_eq!(report.winning_attempt().unwrap().strategy, "direct");
}
