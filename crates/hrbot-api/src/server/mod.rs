//! Server setup and initialization
//!
//! Provides the application builder and the server runner. Startup order:
//! store pool, schema, command registration, then serve.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use hrbot_common::{AppConfig, AppError};
use hrbot_core::CrossReferenceNotifier;
use hrbot_db::{create_pool, ensure_schema, DatabaseConfig};
use hrbot_discord::commands::command_definitions;
use hrbot_discord::{DiscordClient, DiscordConfig, DiscordNotifier, SignatureVerifier};
use hrbot_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Discord REST client for the configured application
pub fn create_discord_client(config: &AppConfig) -> Result<DiscordClient, AppError> {
    let discord = DiscordConfig::new(config.discord.token.clone(), config.discord.application_id)
        .with_api_base(config.discord.api_base.clone())
        .with_optional_notification_channel(config.discord.notification_channel_id);

    DiscordClient::new(discord).map_err(|e| AppError::Config(e.to_string()))
}

/// Open the store, ensure the schema and create AppState
pub async fn create_app_state(
    config: AppConfig,
    notifier: Arc<dyn CrossReferenceNotifier>,
) -> Result<AppState, AppError> {
    let verifier = SignatureVerifier::from_hex(&config.discord.public_key)
        .map_err(|e| AppError::Config(format!("DISCORD_PUBLIC_KEY: {e}")))?;

    info!(url = %config.database.url, "Opening SQLite store...");
    let pool = create_pool(&DatabaseConfig::new(config.database.url.clone()))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    ensure_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Store ready");

    let service_context = ServiceContext::sqlite(pool, notifier);

    Ok(AppState::new(service_context, config, verifier))
}

/// Overwrite the global slash commands; failures are logged, not fatal
pub async fn register_commands(client: &DiscordClient) {
    match client.register_commands(&command_definitions()).await {
        Ok(count) => info!(count, "Slash commands registered"),
        Err(e) => warn!(error = %e, "Slash command registration failed"),
    }
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete bot with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;
    let register = config.discord.register_commands;

    let client = create_discord_client(&config)?;
    let notifier = Arc::new(DiscordNotifier::new(client.clone()));

    let state = create_app_state(config, notifier).await?;

    if register {
        register_commands(&client).await;
    }

    let app = create_app(state);

    run_server(app, addr).await
}
