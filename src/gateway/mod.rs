pub mod huggingface;
pub mod mock;
pub mod ollama;

use crate::config::Config;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

pub use huggingface::HuggingFaceClient;
pub use ollama::OllamaClient;

/// Which backend a request is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Local,
    Cloud,
}

impl Provider {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ollama" | "local" => Some(Self::Local),
            "huggingface" | "cloud" => Some(Self::Cloud),
            _ => None,
        }
    }

    /// Header value wins over the configured default; the local backend is the fallback.
    pub fn resolve(header: Option<&str>, default: Option<Provider>) -> Self {
        if let Some(value) = header {
            match Self::from_name(value) {
                Some(provider) => return provider,
                None => debug!(value, "ignoring unknown provider header"),
            }
        }
        default.unwrap_or(Self::Local)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "ollama",
            Self::Cloud => "huggingface",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Hugging Face API key not set")]
    MisconfiguredCredential,

    #[error("{backend} API error")]
    Backend { backend: &'static str, details: String },

    #[error("Failed to get AI response")]
    Transport(String),
}

impl GatewayError {
    /// Upstream message carried alongside the error, if any.
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::MisconfiguredCredential => None,
            Self::Backend { details, .. } => Some(details),
            Self::Transport(details) => Some(details),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// A text-generation backend: one prompt in, one block of text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, model: Option<&str>) -> Result<String, GatewayError>;
}

#[derive(Clone)]
pub struct Gateway {
    local: Arc<dyn TextGenerator>,
    cloud: Arc<dyn TextGenerator>,
}

impl Gateway {
    pub fn new(local: Arc<dyn TextGenerator>, cloud: Arc<dyn TextGenerator>) -> Self {
        Self { local, cloud }
    }

    pub fn from_config(config: &Config) -> Self {
        let http = reqwest::Client::new();
        let local = OllamaClient::new(http.clone(), &config.ollama_url, &config.ollama_model);
        let cloud = HuggingFaceClient::new(
            http,
            &config.huggingface_url,
            &config.huggingface_model,
            config.huggingface_api_key.clone(),
        );
        Self::new(Arc::new(local), Arc::new(cloud))
    }

    pub async fn generate(&self, prompt: &str, provider: Provider) -> Result<String, GatewayError> {
        let backend = match provider {
            Provider::Local => &self.local,
            Provider::Cloud => &self.cloud,
        };
        backend
            .generate(prompt, None)
            .await
            .map(|text| text.trim().to_string())
            .inspect_err(|err| {
                warn!(provider = provider.as_str(), error = %err, details = err.details(), "generation failed");
            })
    }

    /// Talk to the local backend directly, bypassing provider selection.
    pub fn local(&self) -> &dyn TextGenerator {
        self.local.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockGenerator;
    use super::*;

    #[test]
    fn provider_names() {
        assert_eq!(Provider::from_name("ollama"), Some(Provider::Local));
        assert_eq!(Provider::from_name(" HuggingFace "), Some(Provider::Cloud));
        assert_eq!(Provider::from_name("cloud"), Some(Provider::Cloud));
        assert_eq!(Provider::from_name("gpt"), None);
    }

    #[test]
    fn header_overrides_configured_default() {
        assert_eq!(Provider::resolve(Some("ollama"), Some(Provider::Cloud)), Provider::Local);
        assert_eq!(Provider::resolve(Some("huggingface"), None), Provider::Cloud);
    }

    #[test]
    fn falls_back_to_default_then_local() {
        assert_eq!(Provider::resolve(None, Some(Provider::Cloud)), Provider::Cloud);
        assert_eq!(Provider::resolve(Some("bogus"), Some(Provider::Cloud)), Provider::Cloud);
        assert_eq!(Provider::resolve(None, None), Provider::Local);
    }

    #[tokio::test]
    async fn routes_to_selected_backend() {
        let local = Arc::new(MockGenerator::replying("from local"));
        let cloud = Arc::new(MockGenerator::replying("from cloud"));
        let gateway = Gateway::new(local.clone(), cloud.clone());

        assert_eq!(gateway.generate("hi", Provider::Cloud).await.unwrap(), "from cloud");
        assert_eq!(local.calls(), 0);
        assert_eq!(cloud.calls(), 1);
        assert_eq!(cloud.last_prompt().as_deref(), Some("hi"));

        assert_eq!(gateway.generate("hi", Provider::Local).await.unwrap(), "from local");
        assert_eq!(local.calls(), 1);
    }

    #[tokio::test]
    async fn gateway_trims_but_direct_local_call_does_not() {
        let local = Arc::new(MockGenerator::replying("  About 300 kcal\n"));
        let gateway = Gateway::new(local, Arc::new(MockGenerator::replying("unused")));

        assert_eq!(gateway.generate("hi", Provider::Local).await.unwrap(), "About 300 kcal");
        assert_eq!(
            gateway.local().generate("hi", None).await.unwrap(),
            "  About 300 kcal\n"
        );
    }
}
