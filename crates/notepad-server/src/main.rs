//! Entry point for the notepad-server binary.

use std::sync::Arc;

use notepad_server::{
    build_app,
    config::{LogFormat, ServerConfig, StoreBackend},
    state::AppState,
    summarizer::HttpSummarizer,
};
use notepad_store::{MemoryNoteStore, NoteStore, PgNoteStore};
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the variables may come from the environment.
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ServerConfig::from_env()?;

    // Initialize tracing
    init_tracing(&config.log_level, config.log_format);

    tracing::info!("Starting notepad-server");
    tracing::info!(
        "Configuration: port={}, log_level={}, summarizer={}",
        config.port,
        config.log_level,
        config.summarizer.url
    );

    // Connect to the note store; failure aborts startup
    let store: Arc<dyn NoteStore> = match &config.store {
        StoreBackend::Postgres(store_config) => {
            Arc::new(PgNoteStore::connect(store_config.clone()).await?)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory note store; notes are lost on restart");
            Arc::new(MemoryNoteStore::new())
        }
    };

    let summarizer = Arc::new(HttpSummarizer::new(config.summarizer.clone())?);

    // Build application state and router
    let state = AppState::new(store, summarizer);
    let app = build_app(state, &config)?;

    // Create listener
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initialize the tracing subscriber.
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
