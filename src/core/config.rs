use std::env;

use url::Url;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_ASSEMBLYAI_BASE_URL: &str = "https://api.assemblyai.com/v2";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
    pub openai_base_url: String,
    pub assemblyai_api_key: Option<String>,
    pub assemblyai_base_url: String,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// Provider keys may be absent here; each handler reports a missing key
    /// on its own so the other endpoints keep working.
    ///
    /// # Errors
    ///
    /// Returns `"<VAR>: <reason>"` when a base URL override is not an
    /// absolute `http(s)` URL.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`AppConfig::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            openai_api_key: non_blank("OPENAI_API_KEY"),
            openai_org_id: non_blank("OPENAI_ORG_ID"),
            openai_model: non_blank("OPENAI_MODEL"),
            openai_base_url: base_url(
                "OPENAI_BASE_URL",
                non_blank("OPENAI_BASE_URL"),
                DEFAULT_OPENAI_BASE_URL,
            )?,
            assemblyai_api_key: non_blank("ASSEMBLYAI_API_KEY"),
            assemblyai_base_url: base_url(
                "ASSEMBLYAI_BASE_URL",
                non_blank("ASSEMBLYAI_BASE_URL"),
                DEFAULT_ASSEMBLYAI_BASE_URL,
            )?,
        })
    }
}

fn base_url(name: &str, value: Option<String>, default: &str) -> Result<String, String> {
    let Some(raw) = value else {
        return Ok(default.to_string());
    };

    let parsed = Url::parse(raw.trim()).map_err(|e| format!("{name}: {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("{name}: unsupported scheme '{}'", parsed.scheme()));
    }

    Ok(raw.trim().trim_end_matches('/').to_string())
}
