// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::kernel::{
    BaseSearchService, ClerkClient, ExaClient, GeminiModel, NoopSearchService, ServerDeps,
    SuggestionCache, VonageAdapter,
};
use server_core::server::build_app;
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vonage::{VonageOptions, VonageService};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Web Seek API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Create Vonage service
    let vonage = VonageService::new(VonageOptions {
        api_key: config.vonage_api_key.clone(),
        api_secret: config.vonage_api_secret.clone(),
        application_id: config.vonage_application_id.clone(),
        private_key_path: config.vonage_private_key_path.clone(),
    })
    .context("Failed to create Vonage client")?;

    // Create Clerk session client
    let sessions = Arc::new(ClerkClient::new(config.clerk_secret_key.clone()));

    // Create web searcher (Exa) if an API key is configured
    let web_searcher: Arc<dyn BaseSearchService> = match config.exa_api_key.clone() {
        Some(key) => Arc::new(ExaClient::new(key).context("Failed to create Exa client")?),
        None => Arc::new(NoopSearchService),
    };

    let suggestion_cache = Arc::new(SuggestionCache::new());

    // Sweep expired suggestion entries hourly
    let sweep_cache = suggestion_cache.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(3600));
        loop {
            interval.tick().await;
            sweep_cache.purge_expired().await;
        }
    });

    let deps = ServerDeps::new(
        Arc::new(VonageAdapter::new(Arc::new(vonage))),
        Arc::new(GeminiModel::new(config.gemini_api_key.clone())),
        sessions,
        web_searcher,
        suggestion_cache,
    );

    // Build application
    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
