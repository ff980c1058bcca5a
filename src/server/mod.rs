mod error;
pub mod handlers;
mod types;

pub use error::ApiError;
pub use handlers::AppState;
pub use types::{ErrorResponse, WhisperRequest, WhisperResponse};

use crate::{Result, config::Config, relay::PromptRelay};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub const WHISPERER_PATH: &str = "/api/whisperer";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            WHISPERER_PATH,
            post(handlers::whisper).fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let relay = PromptRelay::from_config(&config)?;

    info!(
        "Relaying prompts to model {} at {}",
        config.upstream.model, config.upstream.base_url
    );

    let app = router(AppState {
        relay: Arc::new(relay),
    });

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
