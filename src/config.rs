use figment::{Figment, providers::Env};
use serde::Deserialize;
use std::sync::LazyLock;

/// Process configuration, sourced from the environment (`.env` honored via
/// `dotenvy` before the first access).
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Shared secret expected in the `x-api-key` header on `/ask`.
    #[serde(default = "default_backend_api_key")]
    pub backend_api_key: String,

    /// Gemini API key. When unset (or blank) every `/ask` falls back to the
    /// dummy answer path.
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

impl Config {
    /// Gemini key, treating the empty string as absent.
    pub fn gemini_api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_api_key: default_backend_api_key(),
            gemini_api_key: None,
            database_url: default_database_url(),
            bind_addr: default_bind_addr(),
            loglevel: default_loglevel(),
        }
    }
}

fn default_backend_api_key() -> String {
    "changeme".to_string()
}

fn default_database_url() -> String {
    "sqlite:assistant.sqlite".to_string()
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Figment::new()
        .merge(Env::raw())
        .extract()
        .expect("FATAL: invalid environment configuration")
});
