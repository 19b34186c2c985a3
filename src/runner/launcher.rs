use crate::error::{AppError, Result};
use crate::runner::strategy::InvocationStrategy;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::process::Command;
use tracing::debug;

/// Seam between the tiered engine and the operating system. The engine only
/// needs the child's exit code; stdout/stderr stay attached to the console
/// so the operator sees the test output as it happens.
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    async fn launch(&self, strategy: &InvocationStrategy) -> Result<i32>;
}

pub struct SystemProcessLauncher;

#[async_trait]
impl ProcessLauncher for SystemProcessLauncher {
    async fn launch(&self, strategy: &InvocationStrategy) -> Result<i32> {
        debug!("🐚 Launching: {}", strategy.command_line());

        let mut cmd = Command::new(&strategy.program);
        cmd.args(&strategy.args);
        if let Some(dir) = &strategy.working_directory {
            cmd.current_dir(dir);
        }

        let status = cmd.status().await.map_err(|e| {
            AppError::ExecutionError(format!("Failed to execute {}: {}", strategy.program, e))
        })?;

        Ok(status.code().unwrap_or(-1))
    }
}

/// Launcher that replays a scripted sequence of outcomes instead of spawning
/// children, and records which strategies were launched in what order.
pub struct ScriptedLauncher {
    outcomes: Mutex<VecDeque<Result<i32>>>,
    launched: Mutex<Vec<String>>,
}

impl ScriptedLauncher {
    pub fn new(outcomes: Vec<Result<i32>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            launched: Mutex::new(Vec::new()),
        }
    }

    pub fn launched_labels(&self) -> Vec<String> {
        self.launched.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessLauncher for ScriptedLauncher {
    async fn launch(&self, strategy: &InvocationStrategy) -> Result<i32> {
        self.launched.lock().unwrap().push(strategy.label.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(AppError::ExecutionError(
                    "ScriptedLauncher ran out of outcomes".to_string(),
                ))
            })
    }
}
