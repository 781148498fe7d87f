//! `GET /transcribe/status?id=...`: relays the provider's transcript state.

use reqwest::Method;
use serde_json::Value;

use super::helpers::{ok_json, require_credential, require_method};
use super::request::ApiRequest;
use super::state::AppState;
use crate::core::models::{TranscribeStatusInput, TranscriptRecord, TranscriptStatus};
use crate::errors::ApiError;
use crate::transcription::AssemblyAiClient;

const REJECTED: &str = "AssemblyAI status lookup failed.";
const UNREACHABLE: &str = "Failed to fetch transcript status.";

/// # Errors
///
/// Any [`ApiError`]; the router renders it into the response.
pub async fn handle(state: &AppState, request: &ApiRequest) -> Result<Value, ApiError> {
    require_method(request, Method::GET)?;
    let config = &state.config;
    let api_key = require_credential(config.assemblyai_api_key.as_deref(), "ASSEMBLYAI_API_KEY")?;
    let input = TranscribeStatusInput::try_from(&request.query)?;

    let client = AssemblyAiClient::new(&state.http, &config.assemblyai_base_url, api_key);
    let transcript = client
        .get_transcript(&input.id)
        .await
        .map_err(|e| ApiError::from_upstream(e, REJECTED, UNREACHABLE))?;

    let record: TranscriptRecord =
        serde_json::from_value(transcript).map_err(|e| ApiError::Transport {
            message: UNREACHABLE,
            details: e.to_string(),
        })?;

    ok_json(&TranscriptStatus::from(record))
}
