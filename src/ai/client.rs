//! `OpenAI` chat-completion client
//!
//! Sends one completion request per summary. No retries, no local timeout.

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::{Value, json};
use tracing::info;

use super::prompt::{SUMMARY_TEMPERATURE, build_messages};
use crate::core::http::send_json;
use crate::errors::UpstreamError;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Pulls `choices[0].message.content` out of a completion, or `""` when the
/// reply does not have that shape.
#[must_use]
pub fn extract_summary(completion: &Value) -> String {
    completion
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Borrowing client for a single summarize call.
pub struct OpenAiClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    api_key: &'a str,
    org_id: Option<&'a str>,
    model_name: &'a str,
}

impl<'a> OpenAiClient<'a> {
    #[must_use]
    pub fn new(
        http: &'a Client,
        base_url: &'a str,
        api_key: &'a str,
        org_id: Option<&'a str>,
        model_name: Option<&'a str>,
    ) -> Self {
        Self {
            http,
            base_url,
            api_key,
            org_id,
            model_name: model_name.unwrap_or(DEFAULT_MODEL),
        }
    }

    fn headers(&self) -> Result<HeaderMap, UpstreamError> {
        let mut headers = HeaderMap::new();
        let auth_value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| UpstreamError::Transport(format!("Invalid Authorization header: {e}")))?;
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(org) = self.org_id {
            let org_value = HeaderValue::from_str(org).map_err(|e| {
                UpstreamError::Transport(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        Ok(headers)
    }

    /// Requests creator notes for `transcript` and returns the raw completion.
    ///
    /// # Errors
    ///
    /// See [`send_json`].
    pub async fn chat_completion(&self, transcript: &str) -> Result<Value, UpstreamError> {
        let request_body = json!({
            "model": self.model_name,
            "temperature": SUMMARY_TEMPERATURE,
            "messages": build_messages(transcript),
        });

        #[cfg(feature = "debug-logs")]
        info!("Using chat completion request:\n{}", request_body);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            model = %self.model_name,
            transcript_chars = transcript.chars().count(),
            "Requesting chat completion"
        );

        let request = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .headers(self.headers()?)
            .json(&request_body);

        send_json(request).await
    }
}
