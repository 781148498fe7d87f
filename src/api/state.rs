use reqwest::Client;

use crate::core::config::AppConfig;

/// Process-wide state built once at cold start and shared by reference.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub http: Client,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend init).
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().build()?;
        Ok(Self { config, http })
    }
}
