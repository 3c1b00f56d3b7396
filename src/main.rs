// Main entry point - Dependency injection and dashboard startup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use crate::application::dashboard_controller::DashboardController;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_repository::HttpWorldClockRepository;
use crate::infrastructure::telemetry::init_telemetry;
use crate::presentation::terminal::run_dashboard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Telemetry is an explicit startup step, not an import side effect.
    init_telemetry();

    let config = load_dashboard_config()?;

    // Repository (infrastructure layer)
    let repository = Arc::new(HttpWorldClockRepository::new(config.api.base_url.clone()));

    // Controller (application layer)
    let controller = DashboardController::new(repository, config.display.use_24_hour);

    tracing::info!(base_url = %config.api.base_url, "starting kronos dashboard");
    run_dashboard(controller, &config).await
}
