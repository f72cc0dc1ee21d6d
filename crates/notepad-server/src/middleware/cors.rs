//! Cross-origin access for the browser frontend.

use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ConfigError;

/// Build CORS layer from configuration.
///
/// `allowed_origins` is either `*` or a comma-separated list of origins.
pub fn build_cors_layer(allowed_origins: &str) -> Result<CorsLayer, ConfigError> {
    if allowed_origins.trim() == "*" {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>()
                .map_err(|e| ConfigError::InvalidValue {
                    name: "CORS_ALLOWED_ORIGINS".to_string(),
                    reason: format!("{s:?}: {e}"),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}
