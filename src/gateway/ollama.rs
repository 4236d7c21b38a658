use super::{GatewayError, TextGenerator};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Client for a locally hosted Ollama generation service.
#[derive(Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaClient {
    pub fn new(http: reqwest::Client, base_url: &str, model: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn generate(&self, prompt: &str, model: Option<&str>) -> Result<String, GatewayError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model: model.unwrap_or(&self.model),
            prompt,
            stream: false,
        };

        let response = self.http.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            let details = response.text().await.unwrap_or_default();
            return Err(GatewayError::Backend {
                backend: "Ollama",
                details,
            });
        }

        let data: GenerateResponse = response.json().await?;
        Ok(data.response)
    }
}
