//! HTTP entry point for card number validation and generation.

use cardnum::server::{ServerConfig, serve};
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cardnum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("{err}, using default configuration");
            ServerConfig::default()
        }
    };

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!(
        card_length = config.card_length,
        "cardnum server listening on http://{bind_address}"
    );
    tracing::info!("  GET /api/health");
    tracing::info!("  GET /api/validate?number=<digits>");
    tracing::info!("  GET /api/generate?iin=<1-2 digits>");

    serve(listener, &config).await?;
    tracing::info!("cardnum server stopped");
    Ok(())
}
