//! Email Notification Service
//!
//! Consumes Vetcore domain events from RabbitMQ and dispatches templated
//! Spanish emails over SMTP.
//!
//! ## Architecture
//!
//! ```text
//! RabbitMQ (vetcore.events topic exchange)
//!   ↓ (seven durable queues, one per event kind)
//! QueueConsumer
//!   ↓ (decodes payloads, explicit ack/nack)
//! EventProcessor
//!   ↓ (reminders enrich via auth/patients services)
//! TemplateEngine (Handlebars, Spanish copy)
//!   ↓
//! SmtpProvider (lettre)
//! ```
//!
//! ## Features
//!
//! - SMTP transport verified before any queue is consumed
//! - RabbitMQ connection retry on startup
//! - Graceful shutdown draining in-flight handlers
//! - Liveness endpoints for container probes

use axum::routing::get;
use axum::{Json, Router};
use broker::{Broker, BrokerConfig};
use core_config::{Environment, FromEnv, app_info, env_or_default};
use domain_notifications::{
    DEFAULT_FRONTEND_URL, DirectoryConfig, EVENTS_EXCHANGE, EmailProvider, EventProcessor,
    HttpDirectory, SmtpConfig, SmtpProvider, TemplateEngine, start_event_consumers,
};
use eyre::{Result, WrapErr};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

#[derive(Serialize)]
struct ApiMessage {
    message: &'static str,
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
}

async fn root() -> Json<ApiMessage> {
    Json(ApiMessage {
        message: "Email Service API working correctly",
    })
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy" })
}

/// Liveness endpoints for container probes.
fn liveness_router() -> Router {
    Router::new().route("/", get(root)).route("/health", get(health))
}

/// Start the liveness HTTP server.
async fn start_liveness_server(port: u16) -> Result<()> {
    let app = liveness_router();

    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind liveness server to {}", addr))?;

    info!(port = %port, "Liveness server listening");

    axum::serve(listener, app)
        .await
        .wrap_err("Liveness server failed")?;

    Ok(())
}

/// Run the email service.
///
/// This is the main entry point. It:
/// 1. Sets up structured logging (env-aware: JSON for prod, pretty for dev)
/// 2. Verifies the SMTP transport before touching the broker
/// 3. Connects to RabbitMQ with retry logic
/// 4. Starts one consumer per event kind plus the liveness server
/// 5. Waits for SIGINT/SIGTERM and drains consumers before closing
///
/// # Errors
///
/// Returns an error if SMTP or broker configuration is invalid, the SMTP
/// transport cannot be verified, the broker cannot be reached, or any
/// queue fails to declare or bind.
pub async fn run() -> Result<()> {
    // Initialize tracing (env-aware: JSON for prod, pretty for dev)
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment);

    let app_info = app_info!();
    info!(name = %app_info.name, version = %app_info.version, "Starting email service");
    info!("Environment: {:?}", environment);

    let port: u16 = env_or_default("PORT", "3002").parse().unwrap_or(3002);

    // Verify the transport up front so a misconfigured relay fails the
    // deploy instead of requeueing every delivery forever
    let smtp_config = SmtpConfig::from_env().wrap_err("Failed to load SMTP configuration")?;
    let provider = SmtpProvider::new(smtp_config).wrap_err("Failed to build SMTP transport")?;
    provider
        .health_check()
        .await
        .wrap_err("SMTP transport verification failed")?;
    info!("SMTP transport verified");

    let broker_config = BrokerConfig::from_env(EVENTS_EXCHANGE);
    let broker = Broker::connect(&broker_config)
        .await
        .wrap_err("Failed to connect to RabbitMQ")?;

    let templates = TemplateEngine::new(env_or_default("FRONTEND_URL", DEFAULT_FRONTEND_URL))
        .wrap_err("Failed to initialize template engine")?;

    let directory_config =
        DirectoryConfig::from_env().wrap_err("Failed to load directory configuration")?;
    let directory =
        HttpDirectory::new(directory_config).wrap_err("Failed to build enrichment client")?;

    let processor = EventProcessor::new(provider, directory, templates);

    // Set up a shutdown signal
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        if let Err(e) = shutdown_signal().await {
            error!("Error waiting for shutdown signal: {}", e);
        }
        let _ = shutdown_tx.send(true);
    });

    let handles = start_event_consumers(&broker, &processor, shutdown_rx.clone())
        .await
        .wrap_err("Failed to start event consumers")?;
    info!(consumers = handles.len(), "All event consumers started");

    tokio::spawn(async move {
        if let Err(e) = start_liveness_server(port).await {
            error!(error = %e, "Liveness server failed");
        }
    });

    // Park until the shutdown flag flips
    while !*shutdown_rx.borrow() {
        if shutdown_rx.changed().await.is_err() {
            break;
        }
    }

    info!("Shutting down gracefully...");

    // Consumers observe the same flag; let in-flight handlers finish and
    // ack on a live channel before the connection goes away
    for handle in handles {
        if let Err(e) = handle.await {
            error!(error = %e, "Consumer task failed");
        }
    }

    broker.close().await;

    info!("Email service stopped");
    Ok(())
}

/// Wait for a shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        },
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        },
    }

    Ok(())
}
