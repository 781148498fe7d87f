use lambda_runtime::{Error, LambdaEvent, service_fn};
use reel_notes::api::{AppState, handler};
use reel_notes::core::config::AppConfig;
use serde_json::Value;
use tracing::{error, warn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Local runs read a .env file; in Lambda the environment is already set.
    dotenvy::dotenv().ok();
    reel_notes::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; summarize requests will fail");
    }
    if config.assemblyai_api_key.is_none() {
        warn!("ASSEMBLYAI_API_KEY is not set; transcription requests will fail");
    }

    let state = AppState::new(config)?;
    let state = &state;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(state, event).await
    }))
    .await
}
