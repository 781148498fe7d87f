#![allow(dead_code)]

use reel_notes::api::{ApiRequest, AppState};
use reel_notes::core::config::AppConfig;
use serde_json::{Value, json};

pub const OPENAI_KEY: &str = "sk-test";
pub const ASSEMBLYAI_KEY: &str = "aai-test";

/// Config pointing both providers at a mock server.
pub fn config_for(server_uri: &str) -> AppConfig {
    AppConfig {
        openai_api_key: Some(OPENAI_KEY.to_string()),
        openai_org_id: None,
        openai_model: None,
        openai_base_url: format!("{server_uri}/v1"),
        assemblyai_api_key: Some(ASSEMBLYAI_KEY.to_string()),
        assemblyai_base_url: format!("{server_uri}/v2"),
    }
}

pub fn state_for(server_uri: &str) -> AppState {
    AppState::new(config_for(server_uri)).expect("http client")
}

/// Nothing listens on port 1, so every call fails at connect time.
pub fn unreachable_state() -> AppState {
    state_for("http://127.0.0.1:1")
}

pub fn event(method: &str, path: &str, body: Option<&str>) -> ApiRequest {
    ApiRequest::from_event(&json!({
        "rawPath": path,
        "requestContext": { "http": { "method": method } },
        "body": body,
    }))
}

pub fn get_with_query(path: &str, raw_query: &str) -> ApiRequest {
    ApiRequest::from_event(&json!({
        "rawPath": path,
        "rawQueryString": raw_query,
        "requestContext": { "http": { "method": "GET" } },
    }))
}

pub fn status_of(response: &Value) -> u64 {
    response["statusCode"].as_u64().expect("statusCode")
}

pub fn body_of(response: &Value) -> Value {
    let raw = response["body"].as_str().expect("string body");
    serde_json::from_str(raw).expect("json body")
}
