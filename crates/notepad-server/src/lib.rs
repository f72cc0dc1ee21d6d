//! notepad-server: HTTP API server for the notepad service
//!
//! This crate provides:
//! - REST endpoints to list, create, and delete notes
//! - A pass-through summarization endpoint backed by an external service
//! - Configuration loading and JSON error responses
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request ID generation, recorded on each request's tracing span
//! - Request tracing and logging
//! - CORS handling
//!
//! The note store and summarizer are injected through [`AppState`], so the
//! same router runs against PostgreSQL in production and memory in tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notepad_server::{config::ServerConfig, build_app};
//!
//! let config = ServerConfig::from_env()?;
//! let app = build_app(state, &config)?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod summarizer;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::request_id::request_span;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
pub use summarizer::{HttpSummarizer, SummarizeError, Summarizer, SummarizerConfig};

// Re-export dependent crates
pub use notepad_core;
pub use notepad_store;

/// Build the router with the full middleware stack.
pub fn build_app(state: AppState, config: &ServerConfig) -> Result<Router, ConfigError> {
    let cors = middleware::cors::build_cors_layer(&config.cors_allowed_origins)?;

    Ok(routes::build_router(state)
        .layer(middleware::request_id::propagate_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(middleware::request_id::set_request_id())
        .layer(cors))
}
