use std::env;

const DEFAULT_API_BASE: &str = "https://api.opendata.go.jp/mhlw";
const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the open-data API, overridable for tests.
    pub api_base: String,
    /// Static API key appended to every request as `?apikey=`.
    pub api_key: String,
    pub port: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("COVID_API_KEY is not set")]
    MissingApiKey,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("COVID_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;
        let api_base = env::var("COVID_API_BASE")
            .ok()
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            api_base,
            api_key,
            port,
        })
    }
}
