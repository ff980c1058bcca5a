use super::{
    error::ApiError,
    types::{WhisperRequest, WhisperResponse},
};
use crate::relay::{PromptRelay, RelayOutput};
use axum::{
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{Instrument, Span, error, info, info_span, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<PromptRelay>,
}

pub async fn whisper(
    State(state): State<AppState>,
    payload: Result<Json<WhisperRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let span = info_span!("whisper", request_id = %Uuid::new_v4());
    handle(state, payload).instrument(span).await
}

async fn handle(
    state: AppState,
    payload: Result<Json<WhisperRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Rejected request body: {}", e);
        ApiError::InvalidPrompt
    })?;

    let prompt = state
        .relay
        .validate(request.prompt.as_deref())
        .map_err(|e| {
            warn!("Rejected prompt: {}", e);
            ApiError::InvalidPrompt
        })?
        .to_string();

    info!("Relaying prompt ({} chars)", prompt.chars().count());

    // Spawned so a client hanging up does not abort the upstream call.
    let relay = state.relay.clone();
    let task = tokio::spawn(async move { relay.relay(&prompt).await }.instrument(Span::current()));

    let output = task
        .await
        .map_err(|e| {
            error!("Relay task failed: {}", e);
            ApiError::Failure
        })?
        .map_err(|e| {
            error!("Fatal error in whisperer: {}", e);
            ApiError::from(e)
        })?;

    Ok(match output {
        RelayOutput::Text(response) => Json(WhisperResponse { response }).into_response(),
        RelayOutput::Raw(body) => Json(body).into_response(),
    })
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn health() -> &'static str {
    "OK"
}
