use crate::runner::launcher::ProcessLauncher;
use crate::runner::strategy::InvocationStrategy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Classification of one attempt. Exit code 127 and spawn failures both mean
/// the strategy's toolchain is absent; everything else non-zero is a test
/// failure. The distinction is diagnostic only and never changes the
/// process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    Success,
    TestFailure,
    NotFound,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub strategy: String,
    pub status: AttemptStatus,
    pub exit_code: Option<i32>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub id: Uuid,
    pub attempts: Vec<AttemptRecord>,
    pub succeeded: bool,
}

impl RunReport {
    /// Exit code for the process: 0 if any tier succeeded, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.succeeded {
            0
        } else {
            1
        }
    }

    pub fn winning_attempt(&self) -> Option<&AttemptRecord> {
        self.attempts
            .iter()
            .find(|a| a.status == AttemptStatus::Success)
    }
}

/// Runs the invocation strategies in order until one succeeds. Each tier is
/// attempted exactly once and blocks until its child exits.
pub struct TieredTestRunner {
    launcher: Arc<dyn ProcessLauncher>,
    tiers: Vec<InvocationStrategy>,
}

impl TieredTestRunner {
    pub fn new(launcher: Arc<dyn ProcessLauncher>, tiers: Vec<InvocationStrategy>) -> Self {
        Self { launcher, tiers }
    }

    pub async fn run(&self) -> RunReport {
        let run_id = Uuid::new_v4();
        info!("🧪 Starting tiered test run: {}", run_id);

        let mut attempts = Vec::new();
        let mut succeeded = false;

        for strategy in &self.tiers {
            println!("🔄 Attempting {}: {}", strategy.label, strategy.command_line());
            let started_at = Utc::now();

            let (status, exit_code) = match self.launcher.launch(strategy).await {
                Ok(code) => (classify(code), Some(code)),
                Err(e) => {
                    warn!("⚠️ Could not launch {}: {}", strategy.label, e);
                    (AttemptStatus::NotFound, None)
                }
            };

            attempts.push(AttemptRecord {
                strategy: strategy.label.clone(),
                status,
                exit_code,
                started_at,
                finished_at: Utc::now(),
            });

            match status {
                AttemptStatus::Success => {
                    println!("✅ {} succeeded", strategy.label);
                    info!("✅ Test run {} succeeded via {}", run_id, strategy.label);
                    succeeded = true;
                    break;
                }
                AttemptStatus::TestFailure => {
                    println!(
                        "❌ {} failed{}",
                        strategy.label,
                        exit_code
                            .map(|c| format!(" (exit code {})", c))
                            .unwrap_or_default()
                    );
                }
                AttemptStatus::NotFound => {
                    println!("❌ {} unavailable in this environment", strategy.label);
                }
            }
        }

        if !succeeded {
            println!("❌ All test execution strategies failed");
            error!("❌ Test run {} exhausted all {} tiers", run_id, attempts.len());
        }

        RunReport {
            id: run_id,
            attempts,
            succeeded,
        }
    }
}

fn classify(exit_code: i32) -> AttemptStatus {
    match exit_code {
        0 => AttemptStatus::Success,
        127 => AttemptStatus::NotFound,
        _ => AttemptStatus::TestFailure,
    }
}
