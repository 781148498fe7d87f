/// reel-notes - Lambda proxy for turning reel audio into creator notes.
///
/// This crate serves three JSON endpoints from a single Lambda function:
/// 1. `summarize`: condenses a transcript into markdown notes with `OpenAI`
/// 2. `transcribe/start`: submits a media URL to `AssemblyAI` for transcription
/// 3. `transcribe/status`: looks up the state of a previously submitted transcript
///
/// Each endpoint validates its input, makes exactly one upstream call and
/// reshapes the upstream reply into its own envelope.
///
/// # Example
///
/// ```no_run
/// use reel_notes::api::{ApiRequest, AppState, route};
/// use reel_notes::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     reel_notes::setup_logging();
///
///     let config = AppConfig {
///         openai_api_key: Some("dummy_openai_key".to_string()),
///         openai_org_id: None,
///         openai_model: None,
///         openai_base_url: "https://api.openai.com/v1".to_string(),
///         assemblyai_api_key: Some("dummy_assemblyai_key".to_string()),
///         assemblyai_base_url: "https://api.assemblyai.com/v2".to_string(),
///     };
///     let state = AppState::new(config)?;
///
///     let event = serde_json::json!({
///         "rawPath": "/api/summarize",
///         "requestContext": { "http": { "method": "POST" } },
///         "body": r#"{"text":"a transcript that is long enough to summarize"}"#,
///     });
///     let response = route(&state, &ApiRequest::from_event(&event)).await;
///     println!("{response}");
///
///     Ok(())
/// }
/// ```
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod transcription;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Log level comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless; only the first subscriber is installed.
///
/// # Example
///
/// ```
/// reel_notes::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
