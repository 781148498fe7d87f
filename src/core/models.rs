use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use crate::errors::ApiError;

pub const MIN_SUMMARY_TEXT_CHARS: usize = 20;

const TEXT_REQUIRED: &str = "text is required and must be at least 20 characters.";
const MEDIA_URL_REQUIRED: &str = "mediaUrl is required.";
const MEDIA_URL_INVALID: &str = "mediaUrl must be a valid URL.";
const MEDIA_URL_SCHEME: &str = "mediaUrl must start with http or https.";
const ID_REQUIRED: &str = "Query parameter id is required.";

static HTTP_SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?$").expect("static regex compile"));

fn non_empty_str<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Length in UTF-16 units after trimming whitespace and any BOM.
fn utf16_len_trimmed(text: &str) -> usize {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .encode_utf16()
        .count()
}

/// Input for the summarize endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeInput {
    pub text: String,
}

impl TryFrom<&Map<String, Value>> for SummarizeInput {
    type Error = ApiError;

    fn try_from(fields: &Map<String, Value>) -> Result<Self, Self::Error> {
        let text = non_empty_str(fields, "text").ok_or(ApiError::InvalidInput(TEXT_REQUIRED))?;
        if utf16_len_trimmed(text) < MIN_SUMMARY_TEXT_CHARS {
            return Err(ApiError::InvalidInput(TEXT_REQUIRED));
        }

        // The untrimmed text is what gets summarized.
        Ok(Self {
            text: text.to_string(),
        })
    }
}

/// Input for the transcription-start endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscribeStartInput {
    pub media_url: String,
}

impl TryFrom<&Map<String, Value>> for TranscribeStartInput {
    type Error = ApiError;

    fn try_from(fields: &Map<String, Value>) -> Result<Self, Self::Error> {
        let media_url =
            non_empty_str(fields, "mediaUrl").ok_or(ApiError::InvalidInput(MEDIA_URL_REQUIRED))?;
        let parsed = Url::parse(media_url).map_err(|_| ApiError::InvalidInput(MEDIA_URL_INVALID))?;
        if !HTTP_SCHEME_RE.is_match(parsed.scheme()) {
            return Err(ApiError::InvalidInput(MEDIA_URL_SCHEME));
        }

        Ok(Self {
            media_url: media_url.to_string(),
        })
    }
}

/// Input for the transcription-status endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscribeStatusInput {
    pub id: String,
}

impl TryFrom<&Map<String, Value>> for TranscribeStatusInput {
    type Error = ApiError;

    fn try_from(query: &Map<String, Value>) -> Result<Self, Self::Error> {
        let id = non_empty_str(query, "id").ok_or(ApiError::InvalidInput(ID_REQUIRED))?;
        Ok(Self { id: id.to_string() })
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Transcript record as returned by the provider. Unknown fields are dropped.
#[derive(Debug, Default, Deserialize)]
pub struct TranscriptRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranscriptCreated {
    pub id: Option<String>,
    pub status: Option<String>,
}

impl From<TranscriptRecord> for TranscriptCreated {
    fn from(record: TranscriptRecord) -> Self {
        Self {
            id: record.id,
            status: record.status,
        }
    }
}

/// Status projection. Every key is always serialized, absent values as `null`
/// except `text`, which falls back to an empty string.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranscriptStatus {
    pub id: Option<String>,
    pub status: Option<String>,
    pub language_code: Option<String>,
    pub text: String,
    pub error: Option<String>,
}

impl From<TranscriptRecord> for TranscriptStatus {
    fn from(record: TranscriptRecord) -> Self {
        Self {
            id: record.id,
            status: record.status,
            language_code: record.language_code,
            text: record.text.unwrap_or_default(),
            error: record.error.filter(|e| !e.is_empty()),
        }
    }
}
