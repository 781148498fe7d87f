//! Normalizes API Gateway / Function URL events into [`ApiRequest`].

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value};

use crate::errors::ApiError;

const BODY_NOT_OBJECT: &str = "Request body must be a JSON object.";

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Absent,
    Raw(String),
    /// Already-decoded JSON handed over by the host.
    Parsed(Value),
    /// Flagged base64 but not valid base64 UTF-8.
    Malformed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Upper-cased HTTP verb; empty when the event carries none.
    pub method: String,
    pub path: String,
    pub query: Map<String, Value>,
    pub body: RequestBody,
}

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

impl ApiRequest {
    /// Builds a request from a REST (v1), HTTP API (v2) or Function URL event.
    #[must_use]
    pub fn from_event(event: &Value) -> Self {
        let method = v_str(event, &["requestContext", "http", "method"])
            .or_else(|| v_str(event, &["httpMethod"]))
            .unwrap_or_default()
            .to_ascii_uppercase();

        let path = v_str(event, &["rawPath"])
            .or_else(|| v_str(event, &["path"]))
            .unwrap_or_default()
            .to_string();

        Self {
            method,
            path,
            query: parse_query(event),
            body: parse_body(event),
        }
    }

    /// Parses the body into a JSON object.
    ///
    /// An absent or blank body yields an empty object so each field rule can
    /// report its own message.
    ///
    /// # Errors
    ///
    /// `ApiError::InvalidInput` when a body is present but is not a JSON object.
    pub fn json_fields(&self) -> Result<Map<String, Value>, ApiError> {
        match &self.body {
            RequestBody::Absent => Ok(Map::new()),
            RequestBody::Raw(raw) if raw.trim().is_empty() => Ok(Map::new()),
            RequestBody::Raw(raw) => serde_json::from_str::<Map<String, Value>>(raw)
                .map_err(|_| ApiError::InvalidInput(BODY_NOT_OBJECT)),
            RequestBody::Parsed(Value::Object(map)) => Ok(map.clone()),
            RequestBody::Parsed(Value::Null) => Ok(Map::new()),
            RequestBody::Parsed(_) | RequestBody::Malformed => {
                Err(ApiError::InvalidInput(BODY_NOT_OBJECT))
            }
        }
    }
}

fn parse_query(event: &Value) -> Map<String, Value> {
    if let Some(params) = event.get("queryStringParameters").and_then(Value::as_object) {
        return params.clone();
    }

    let Some(raw) = v_str(event, &["rawQueryString"]).filter(|q| !q.is_empty()) else {
        return Map::new();
    };

    let mut query = Map::new();
    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        // First occurrence wins.
        query
            .entry(key.into_owned())
            .or_insert_with(|| Value::String(value.into_owned()));
    }
    query
}

fn parse_body(event: &Value) -> RequestBody {
    let is_base64 = event
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    match event.get("body") {
        None | Some(Value::Null) => RequestBody::Absent,
        Some(Value::String(raw)) if is_base64 => STANDARD
            .decode(raw.trim())
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .map_or(RequestBody::Malformed, RequestBody::Raw),
        Some(Value::String(raw)) => RequestBody::Raw(raw.clone()),
        Some(other) => RequestBody::Parsed(other.clone()),
    }
}
