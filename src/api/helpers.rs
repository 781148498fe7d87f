//! Response builders and the guards shared by every handler.

use reqwest::Method;
use serde::Serialize;
use serde_json::{Value, json};

use super::request::ApiRequest;
use crate::errors::ApiError;

// ============================================================================
// Response Builders
// ============================================================================

/// Returns an API Gateway proxy result with a JSON body.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "content-type": "application/json" },
        "body": body.to_string()
    })
}

/// Serializes `payload` into a 200 response.
///
/// # Errors
///
/// Returns `ApiError::Transport` if `payload` cannot be represented as JSON.
pub fn ok_json<T: Serialize>(payload: &T) -> Result<Value, ApiError> {
    let body = serde_json::to_value(payload).map_err(|e| ApiError::Transport {
        message: "Failed to encode response.",
        details: e.to_string(),
    })?;
    Ok(json_response(200, &body))
}

// ============================================================================
// Guards
// ============================================================================

/// # Errors
///
/// `ApiError::MethodNotAllowed` unless the request uses `allowed`.
pub fn require_method(request: &ApiRequest, allowed: Method) -> Result<(), ApiError> {
    if request.method == allowed.as_str() {
        Ok(())
    } else {
        Err(ApiError::MethodNotAllowed { allowed })
    }
}

/// # Errors
///
/// `ApiError::MissingCredential` naming `variable` when `value` is unset.
pub fn require_credential<'a>(
    value: Option<&'a str>,
    variable: &'static str,
) -> Result<&'a str, ApiError> {
    value.ok_or(ApiError::MissingCredential(variable))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::RequestBody;
    use serde_json::Map;

    fn request(method: &str) -> ApiRequest {
        ApiRequest {
            method: method.to_string(),
            path: "/summarize".to_string(),
            query: Map::new(),
            body: RequestBody::Absent,
        }
    }

    #[test]
    fn json_response_wraps_body_as_string() {
        let response = json_response(201, &json!({ "ok": true }));
        assert_eq!(response["statusCode"], 201);
        assert_eq!(response["headers"]["content-type"], "application/json");
        assert_eq!(response["body"], "{\"ok\":true}");
    }

    #[test]
    fn method_guard_names_the_expected_verb() {
        assert!(require_method(&request("POST"), Method::POST).is_ok());

        let err = require_method(&request("GET"), Method::POST).unwrap_err();
        assert_eq!(err.status_code(), 405);
        assert_eq!(err.to_string(), "Method not allowed. Use POST.");

        let err = require_method(&request("DELETE"), Method::GET).unwrap_err();
        assert_eq!(err.to_string(), "Method not allowed. Use GET.");
    }

    #[test]
    fn credential_guard_names_the_variable() {
        assert_eq!(require_credential(Some("k"), "OPENAI_API_KEY").unwrap(), "k");

        let err = require_credential(None, "ASSEMBLYAI_API_KEY").unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert_eq!(
            err.to_string(),
            "Missing ASSEMBLYAI_API_KEY environment variable."
        );
    }
}
