//! `POST /summarize`: turns a transcript into markdown creator notes.

use reqwest::Method;
use serde_json::Value;

use super::helpers::{ok_json, require_credential, require_method};
use super::request::ApiRequest;
use super::state::AppState;
use crate::ai::{OpenAiClient, extract_summary};
use crate::core::models::{SummarizeInput, SummaryResponse};
use crate::errors::ApiError;

/// # Errors
///
/// Any [`ApiError`]; the router renders it into the response.
pub async fn handle(state: &AppState, request: &ApiRequest) -> Result<Value, ApiError> {
    require_method(request, Method::POST)?;
    let config = &state.config;
    let api_key = require_credential(config.openai_api_key.as_deref(), "OPENAI_API_KEY")?;
    let input = SummarizeInput::try_from(&request.json_fields()?)?;

    let client = OpenAiClient::new(
        &state.http,
        &config.openai_base_url,
        api_key,
        config.openai_org_id.as_deref(),
        config.openai_model.as_deref(),
    );

    let completion = client.chat_completion(&input.text).await.map_err(|e| {
        ApiError::from_upstream(e, "OpenAI request failed.", "Failed to contact OpenAI.")
    })?;

    ok_json(&SummaryResponse {
        summary: extract_summary(&completion),
    })
}
