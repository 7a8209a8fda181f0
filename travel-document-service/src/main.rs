use service_core::observability::{init_tracing, shutdown_tracing};
use travel_document_service::config::TravelDocConfig;
use travel_document_service::services::init_metrics;
use travel_document_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Must precede any metrics being recorded
    init_metrics().map_err(|e| std::io::Error::other(format!("Metrics error: {}", e)))?;

    let config = TravelDocConfig::load()
        .map_err(|e| std::io::Error::other(format!("Configuration error: {}", e)))?;

    init_tracing(
        "travel-document-service",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    )
    .map_err(|e| std::io::Error::other(format!("Tracing error: {}", e)))?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    let result = app.run_until_stopped().await;
    shutdown_tracing();
    result
}
