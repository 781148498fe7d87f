//! `POST /transcribe/start`: submits a media URL for transcription.

use reqwest::Method;
use serde_json::Value;

use super::helpers::{ok_json, require_credential, require_method};
use super::request::ApiRequest;
use super::state::AppState;
use crate::core::models::{TranscribeStartInput, TranscriptCreated, TranscriptRecord};
use crate::errors::ApiError;
use crate::transcription::AssemblyAiClient;

const REJECTED: &str = "AssemblyAI rejected transcript creation.";
const UNREACHABLE: &str = "Failed to contact AssemblyAI.";

/// # Errors
///
/// Any [`ApiError`]; the router renders it into the response.
pub async fn handle(state: &AppState, request: &ApiRequest) -> Result<Value, ApiError> {
    require_method(request, Method::POST)?;
    let config = &state.config;
    let api_key = require_credential(config.assemblyai_api_key.as_deref(), "ASSEMBLYAI_API_KEY")?;
    let input = TranscribeStartInput::try_from(&request.json_fields()?)?;

    let client = AssemblyAiClient::new(&state.http, &config.assemblyai_base_url, api_key);
    let created = client
        .create_transcript(&input.media_url)
        .await
        .map_err(|e| ApiError::from_upstream(e, REJECTED, UNREACHABLE))?;

    let record: TranscriptRecord =
        serde_json::from_value(created).map_err(|e| ApiError::Transport {
            message: UNREACHABLE,
            details: e.to_string(),
        })?;

    ok_json(&TranscriptCreated::from(record))
}
