use crate::gateway::Provider;
use std::{env, path::PathBuf};
use tracing::warn;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama2";
pub const DEFAULT_HUGGINGFACE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_HUGGINGFACE_MODEL: &str = "meta-llama/Llama-2-7b-chat-hf";

/// Process configuration, read once at startup and shared with every handler.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider used when a request does not name one.
    pub default_provider: Option<Provider>,
    pub ollama_url: String,
    pub ollama_model: String,
    pub huggingface_url: String,
    pub huggingface_model: String,
    pub huggingface_api_key: Option<String>,
    pub data_path: PathBuf,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_provider: None,
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            ollama_model: DEFAULT_OLLAMA_MODEL.to_string(),
            huggingface_url: DEFAULT_HUGGINGFACE_URL.to_string(),
            huggingface_model: DEFAULT_HUGGINGFACE_MODEL.to_string(),
            huggingface_api_key: None,
            data_path: PathBuf::from("workouts.json"),
            port: 8080,
        }
    }
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let default_provider = match non_empty("AI_PROVIDER") {
            Some(name) => {
                let provider = Provider::from_name(&name);
                if provider.is_none() {
                    warn!(value = %name, "ignoring unknown AI_PROVIDER");
                }
                provider
            }
            None => None,
        };

        let port = match non_empty("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("PORT", value))?,
            None => defaults.port,
        };

        Ok(Self {
            default_provider,
            ollama_url: non_empty("OLLAMA_URL").unwrap_or(defaults.ollama_url),
            ollama_model: non_empty("OLLAMA_MODEL").unwrap_or(defaults.ollama_model),
            huggingface_url: non_empty("HUGGINGFACE_API_URL").unwrap_or(defaults.huggingface_url),
            huggingface_model: non_empty("HUGGINGFACE_MODEL").unwrap_or(defaults.huggingface_model),
            huggingface_api_key: non_empty("HUGGINGFACE_API_KEY"),
            data_path: non_empty("APP_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            port,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.default_provider, None);
        assert_eq!(config.ollama_url, DEFAULT_OLLAMA_URL);
        assert_eq!(config.huggingface_model, DEFAULT_HUGGINGFACE_MODEL);
        assert!(config.huggingface_api_key.is_none());
        assert_eq!(config.data_path, PathBuf::from("workouts.json"));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn reads_provider_and_credentials() {
        let config = Config::from_lookup(lookup(&[
            ("AI_PROVIDER", "huggingface"),
            ("HUGGINGFACE_API_KEY", " hf_secret "),
            ("HUGGINGFACE_MODEL", "mistralai/Mistral-7B"),
            ("PORT", "3000"),
        ]))
        .unwrap();
        assert_eq!(config.default_provider, Some(Provider::Cloud));
        assert_eq!(config.huggingface_api_key.as_deref(), Some("hf_secret"));
        assert_eq!(config.huggingface_model, "mistralai/Mistral-7B");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn unknown_provider_is_ignored() {
        let config = Config::from_lookup(lookup(&[("AI_PROVIDER", "openai")])).unwrap();
        assert_eq!(config.default_provider, None);
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = Config::from_lookup(lookup(&[("HUGGINGFACE_API_KEY", "   ")])).unwrap();
        assert!(config.huggingface_api_key.is_none());
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
