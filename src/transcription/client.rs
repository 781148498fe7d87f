use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde_json::{Value, json};
use tracing::info;

use crate::core::http::send_json;
use crate::errors::UpstreamError;

/// Speech model requested for every transcript.
pub const SPEECH_MODEL: &str = "best";

/// Borrowing client for one transcript call. The key is sent as the raw
/// `authorization` value, without a `Bearer` prefix.
pub struct AssemblyAiClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    api_key: &'a str,
}

impl<'a> AssemblyAiClient<'a> {
    #[must_use]
    pub fn new(http: &'a Client, base_url: &'a str, api_key: &'a str) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    fn auth_header(&self) -> Result<HeaderValue, UpstreamError> {
        HeaderValue::from_str(self.api_key)
            .map_err(|e| UpstreamError::Transport(format!("Invalid Authorization header: {e}")))
    }

    /// Submits `audio_url` for transcription.
    ///
    /// # Errors
    ///
    /// See [`send_json`].
    pub async fn create_transcript(&self, audio_url: &str) -> Result<Value, UpstreamError> {
        info!("Submitting transcript job");

        let request = self
            .http
            .post(transcript_url(self.base_url))
            .header(AUTHORIZATION, self.auth_header()?)
            .json(&json!({
                "audio_url": audio_url,
                "speech_model": SPEECH_MODEL,
            }));

        send_json(request).await
    }

    /// Fetches the current state of transcript `id`.
    ///
    /// # Errors
    ///
    /// See [`send_json`].
    pub async fn get_transcript(&self, id: &str) -> Result<Value, UpstreamError> {
        info!(transcript_id = %id, "Fetching transcript status");

        let request = self
            .http
            .get(transcript_status_url(self.base_url, id))
            .header(AUTHORIZATION, self.auth_header()?);

        send_json(request).await
    }
}

fn transcript_url(base_url: &str) -> String {
    format!("{base_url}/transcript")
}

/// The id is percent-encoded as a single path segment. `!'()*` stay literal,
/// matching the encoding web clients use for the same id.
fn transcript_status_url(base_url: &str, id: &str) -> String {
    format!("{base_url}/transcript/{}", encode_path_segment(id))
}

fn encode_path_segment(id: &str) -> String {
    const KEPT: [(&str, &str); 5] = [
        ("%21", "!"),
        ("%27", "'"),
        ("%28", "("),
        ("%29", ")"),
        ("%2A", "*"),
    ];

    let mut encoded = urlencoding::encode(id).into_owned();
    for (escaped, literal) in KEPT {
        encoded = encoded.replace(escaped, literal);
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_url_encodes_id_as_one_segment() {
        assert_eq!(
            transcript_status_url("https://api.assemblyai.com/v2", "abc-123"),
            "https://api.assemblyai.com/v2/transcript/abc-123"
        );
        assert_eq!(
            transcript_status_url("https://api.assemblyai.com/v2", "../a b?c"),
            "https://api.assemblyai.com/v2/transcript/..%2Fa%20b%3Fc"
        );
    }

    #[test]
    fn status_url_keeps_sub_delims_literal() {
        assert_eq!(
            transcript_status_url("https://api.assemblyai.com/v2", "it's(1)!*"),
            "https://api.assemblyai.com/v2/transcript/it's(1)!*"
        );
        // A literal "%21" in the id is still escaped as "%2521".
        assert_eq!(encode_path_segment("%21"), "%2521");
    }

    #[test]
    fn key_is_sent_without_bearer_prefix() {
        let http = Client::new();
        let client = AssemblyAiClient::new(&http, "http://localhost", "raw-key");
        assert_eq!(client.auth_header().unwrap(), "raw-key");
    }
}
