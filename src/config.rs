// src/config.rs
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5001";

/// Startup configuration, built once and handed to [`crate::state::AppState`].
#[derive(Clone)]
pub struct RelayConfig {
    pub bind_addr: String,
    pub api_url: String,
    /// `None` when `DEEPSEEK_API_KEY` is unset or blank. Chat requests then fail
    /// with `AppError::MissingApiKey` instead of the process refusing to start.
    pub api_key: Option<String>,
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("bind_addr", &self.bind_addr)
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl RelayConfig {
    /// | Variable           | Default                                        |
    /// |--------------------|------------------------------------------------|
    /// | `DEEPSEEK_API_KEY` | none                                           |
    /// | `DEEPSEEK_API_URL` | `https://api.deepseek.com/v1/chat/completions` |
    /// | `BIND_ADDR`        | `0.0.0.0:5001`                                 |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        Self {
            bind_addr: read("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned()),
            api_url: read("DEEPSEEK_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
            api_key: read("DEEPSEEK_API_KEY"),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
