//! Hauln' Heavy Estimator - API Server Binary
//!
//! This binary starts the HTTP API server for the estimator.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin estimator-api
//!
//! # Run with environment variables
//! ESTIMATOR_PORT=8080 ESTIMATOR_GEOAPIFY_API_KEY=... cargo run --bin estimator-api
//! ```
//!
//! # Environment Variables
//!
//! * `ESTIMATOR_HOST` - Server host (default: 0.0.0.0)
//! * `ESTIMATOR_PORT` - Server port (default: 8080)
//! * `ESTIMATOR_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `ESTIMATOR_GEOAPIFY_API_KEY` - Enables address suggestions
//! * `ESTIMATOR_RESEND_API_KEY` - Enables real email delivery
//! * `ESTIMATOR_EMAIL_FROM`, `ESTIMATOR_BUSINESS_EMAIL` - Sender and business inbox
//! * `ESTIMATOR_SUPPORT_PHONE` - Number quoted in SMS bodies
//! * `ESTIMATOR_TWILIO_ACCOUNT_SID`, `ESTIMATOR_TWILIO_AUTH_TOKEN`,
//!   `ESTIMATOR_TWILIO_FROM_NUMBER` - Enable SMS delivery
//! * `ESTIMATOR_EQUIPMENT_CATALOG_PATH` - CSV replacing the built-in catalog
//! * `ESTIMATOR_ASSUMED_MILES` - Route length used for pricing (default: 500)

use interface_api::{config::ApiConfig, create_router, AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// # Errors
///
/// Returns an error if:
/// - An adapter or the equipment catalog cannot be built
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Hauln' Heavy Estimator API Server"
    );

    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to individual variables and defaults when the prefixed set
/// cannot be deserialized.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Falling back to default configuration: {}", e);
        let defaults = ApiConfig::default();
        ApiConfig {
            host: std::env::var("ESTIMATOR_HOST").unwrap_or(defaults.host),
            port: std::env::var("ESTIMATOR_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: std::env::var("ESTIMATOR_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            geoapify_api_key: std::env::var("ESTIMATOR_GEOAPIFY_API_KEY")
                .or_else(|_| std::env::var("GEOAPIFY_API_KEY"))
                .ok(),
            resend_api_key: std::env::var("ESTIMATOR_RESEND_API_KEY")
                .or_else(|_| std::env::var("RESEND_API_KEY"))
                .ok(),
            twilio_account_sid: std::env::var("TWILIO_ACCOUNT_SID").ok(),
            twilio_auth_token: std::env::var("TWILIO_AUTH_TOKEN").ok(),
            twilio_from_number: std::env::var("TWILIO_PHONE_NUMBER").ok(),
            ..defaults
        }
    })
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
