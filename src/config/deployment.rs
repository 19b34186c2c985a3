use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Typed mirror of the deployment document: one entry per environment,
/// consumed by the external rollout automation. This crate loads and
/// validates the document; it never performs a rollout or polls a health
/// endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentConfig {
    #[serde(default)]
    pub environments: HashMap<String, EnvironmentConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub servers: Vec<ServerTarget>,
    pub health_check: HealthCheck,
    pub rollback: RollbackPolicy,
    pub notifications: Option<NotificationSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerTarget {
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub healthy_threshold: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollbackPolicy {
    pub enabled: bool,
    pub keep_releases: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub slack_webhook: Option<String>,
    pub email: Option<String>,
}

impl DeploymentConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<DeploymentConfig> {
        let raw = std::fs::read_to_string(path)?;
        let config: DeploymentConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.environments.is_empty() {
            return Err(AppError::ValidationError(
                "Deployment config has no environments".to_string(),
            ));
        }

        for (name, env) in &self.environments {
            env.validate(name)?;
        }

        Ok(())
    }

    pub fn environment(&self, name: &str) -> Result<&EnvironmentConfig> {
        self.environments
            .get(name)
            .ok_or_else(|| AppError::NotFound(format!("Environment not found: {}", name)))
    }

    pub fn log_summary(&self) {
        for (name, env) in &self.environments {
            info!(
                "📦 Environment '{}': {} server(s), health check {}, rollback {}",
                name,
                env.servers.len(),
                env.health_check.endpoint,
                if env.rollback.enabled { "on" } else { "off" },
            );
        }
    }
}

impl EnvironmentConfig {
    fn validate(&self, name: &str) -> Result<()> {
        if self.servers.is_empty() {
            return Err(AppError::ValidationError(format!(
                "Environment '{}' has no servers",
                name
            )));
        }

        for server in &self.servers {
            if server.host.is_empty() {
                return Err(AppError::ValidationError(format!(
                    "Environment '{}' has a server with an empty host",
                    name
                )));
            }
            if server.port == 0 {
                return Err(AppError::ValidationError(format!(
                    "Environment '{}' server {} has port 0",
                    name, server.host
                )));
            }
        }

        if !self.health_check.endpoint.starts_with('/') {
            return Err(AppError::ValidationError(format!(
                "Environment '{}' health check endpoint must start with '/': {}",
                name, self.health_check.endpoint
            )));
        }

        if self.rollback.enabled && self.rollback.keep_releases == 0 {
            return Err(AppError::ValidationError(format!(
                "Environment '{}' enables rollback but keeps no releases",
                name
            )));
        }

        if let Some(notifications) = &self.notifications {
            if notifications.slack_webhook.is_none() && notifications.email.is_none() {
                return Err(AppError::ValidationError(format!(
                    "Environment '{}' notification settings need at least one channel",
                    name
                )));
            }
        }

        Ok(())
    }
}
