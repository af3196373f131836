use service_core::observability::init_tracing;
use task_service::config::TaskConfig;
use task_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("task-service", "info");

    let config = TaskConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start task service: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!(port = app.port(), "Task service started");

    app.run_until_stopped().await
}
