//! HTTP service exposing validation and generation as JSON endpoints.
//!
//! All logging of the crate happens here; the engine in [`crate::core`]
//! only returns typed errors.
//!
//! # Example
//!
//! ```ignore
//! use cardnum::server::{ServerConfig, serve};
//!
//! let config = ServerConfig::from_env()?;
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! serve(listener, &config).await?;
//! ```

mod config;
mod error;
mod routes;

pub use config::{ConfigError, ServerConfig};
pub use error::{
    ApiError, ErrorBody, GENERATE_MISSING_IIN, INVALID_IIN, VALIDATE_MISSING_NUMBER,
};
pub use routes::{
    AppState, HealthResponse, QueryPairs, create_router, generate, health_check, validate,
};

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Serve the API on `listener` until the process receives Ctrl+C.
pub async fn serve(listener: TcpListener, config: &ServerConfig) -> std::io::Result<()> {
    let app = create_router(AppState::from(config)).layer(TraceLayer::new_for_http());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl+C: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
