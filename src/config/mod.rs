pub mod deployment;
pub mod schedules;

pub use deployment::{
    DeploymentConfig, EnvironmentConfig, HealthCheck, NotificationSettings, RollbackPolicy,
    ServerTarget,
};
pub use schedules::{ScheduleTable, ScheduledJob};

/// Ambient configuration for the harness binary. Every knob has a default so
/// the CLI surface stays argument-free.
#[derive(Debug, Clone)]
pub struct AppConfiguration {
    pub test_file: String,
    pub deploy_config_path: String,
    pub schedules_path: String,
}

impl AppConfiguration {
    pub fn init() -> AppConfiguration {
        let test_file = std::env::var("OPSKIT_TEST_FILE")
            .unwrap_or_else(|_| "tests/test_deployment.py".to_owned());
        let deploy_config_path = std::env::var("OPSKIT_DEPLOY_CONFIG")
            .unwrap_or_else(|_| "deploy/deploy_config.json".to_owned());
        let schedules_path = std::env::var("OPSKIT_SCHEDULES")
            .unwrap_or_else(|_| "deploy/schedules.json".to_owned());

        AppConfiguration {
            test_file,
            deploy_config_path,
            schedules_path,
        }
    }
}
