use std::sync::Arc;
use std::time::Duration;

use hackathon_api::AppData;
use hackathon_api::api::build_routes;
use hackathon_api::config::{AppSettings, LoggingConfig, SystemEnvironment, init_logging};
use poem::{Server, listener::TcpListener};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let settings = AppSettings::from_env()?;
    init_logging(&LoggingConfig::from_env_provider(&SystemEnvironment, settings.debug()))?;

    tracing::info!("Starting Hackathon API");
    tracing::debug!("Loaded settings: {:?}", settings);

    let app_data = Arc::new(AppData::init(&settings).await?);
    let pool = app_data.connections.primary.clone();
    let app = build_routes(app_data, &settings);

    let address = settings.server_address();
    tracing::info!("Listening on http://{}", address);
    tracing::info!("Swagger UI available at http://{}/docs", address);

    Server::new(TcpListener::bind(address))
        .run_with_graceful_shutdown(
            app,
            async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutdown signal received");
            },
            Some(Duration::from_secs(5)),
        )
        .await?;

    if let Err(e) = pool.close().await {
        tracing::warn!("Failed to close database pool: {}", e);
    }

    tracing::info!("Server stopped");
    Ok(())
}
