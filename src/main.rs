use dotenv::dotenv;
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use opskit::config::{AppConfiguration, DeploymentConfig, ScheduleTable};
use opskit::runner::{default_tiers, SystemProcessLauncher, TieredTestRunner};

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfiguration::init();

    println!("🧪 opskit test harness");
    println!("📄 Test file: {}", config.test_file);

    // The ops documents are collaborators' data; a broken document is worth
    // a warning but must not block the test run.
    match DeploymentConfig::from_file(&config.deploy_config_path) {
        Ok(deploy) => match deploy.validate() {
            Ok(()) => deploy.log_summary(),
            Err(e) => warn!("⚠️ Deployment config invalid: {}", e),
        },
        Err(e) => warn!("⚠️ Deployment config not loaded from {}: {}", config.deploy_config_path, e),
    }

    match ScheduleTable::from_file(&config.schedules_path) {
        Ok(schedules) => match schedules.validate() {
            Ok(()) => schedules.log_summary(),
            Err(e) => warn!("⚠️ Schedule table invalid: {}", e),
        },
        Err(e) => warn!("⚠️ Schedule table not loaded from {}: {}", config.schedules_path, e),
    }

    let runner = TieredTestRunner::new(
        Arc::new(SystemProcessLauncher),
        default_tiers(&config.test_file),
    );
    let report = runner.run().await;

    std::process::exit(report.exit_code());
}
