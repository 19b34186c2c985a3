use crate::error::{AppError, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// The cron job table for the ops jobs (backups, backup verification,
/// analytics collection). The OS scheduler runs these; this crate only
/// validates the table and answers coarse "when next" questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleTable {
    #[serde(default)]
    pub jobs: Vec<ScheduledJob>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledJob {
    pub name: String,
    pub cron: String,
    pub command: String,
    pub description: Option<String>,
}

impl ScheduleTable {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ScheduleTable> {
        let raw = std::fs::read_to_string(path)?;
        let table: ScheduleTable = serde_json::from_str(&raw)?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for job in &self.jobs {
            if job.name.is_empty() {
                return Err(AppError::ValidationError(
                    "Scheduled job has an empty name".to_string(),
                ));
            }
            if !seen.insert(job.name.as_str()) {
                return Err(AppError::ValidationError(format!(
                    "Duplicate scheduled job name: {}",
                    job.name
                )));
            }
            if job.command.is_empty() {
                return Err(AppError::ValidationError(format!(
                    "Scheduled job '{}' has an empty command",
                    job.name
                )));
            }
            validate_cron(&job.cron).map_err(|e| {
                AppError::ValidationError(format!("Scheduled job '{}': {}", job.name, e))
            })?;
        }

        Ok(())
    }

    pub fn log_summary(&self) {
        for job in &self.jobs {
            info!("📅 Scheduled job '{}' ({}): {}", job.name, job.cron, job.command);
        }
    }
}

impl ScheduledJob {
    /// Coarse next-fire computation for the expressions the ops jobs use.
    /// Unrecognized expressions fall back to one hour out.
    pub fn next_run_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self.cron.as_str() {
            "0 * * * *" => now + Duration::hours(1),
            "0 0 * * *" => now + Duration::days(1),
            "0 0 * * 0" => now + Duration::weeks(1),
            _ => {
                warn!("⚠️ Unsupported cron expression: {}", self.cron);
                now + Duration::hours(1)
            }
        }
    }
}

fn validate_cron(expression: &str) -> std::result::Result<(), String> {
    let fields: Vec<&str> = expression.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(format!(
            "cron expression must have 5 fields, got {}",
            fields.len()
        ));
    }

    for field in fields {
        let valid = field
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '*' | '/' | ',' | '-'));
        if !valid {
            return Err(format!("invalid cron field: {}", field));
        }
    }

    Ok(())
}
