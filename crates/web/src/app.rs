//! Application router assembly.
//!
//! Shared between the server binary and the integration tests so both run
//! the same middleware stack. The Sentry tower layers are added by the
//! binary only.

use std::path::{Path, PathBuf};

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::WebConfig;
use crate::state::AppState;
use crate::{middleware, routes};

/// Locate the static asset directory.
///
/// Prefers the workspace-relative path used in deployment; falls back to
/// the crate's own directory so test binaries, which run with a different
/// working directory, serve the same assets.
fn static_dir() -> PathBuf {
    let deployed = Path::new("crates/web/static");
    if deployed.is_dir() {
        deployed.to_path_buf()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
    }
}

/// Build the full application router from configuration.
#[must_use]
pub fn build(config: WebConfig) -> Router {
    let state = AppState::new(config.clone());
    let session_layer = middleware::create_session_layer(&config);

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(static_dir()))
        .layer(axum_middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the upstream.
async fn health() -> &'static str {
    "ok"
}
