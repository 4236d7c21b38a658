use super::{GatewayError, TextGenerator};
use async_trait::async_trait;
use serde_json::Value;

/// Client for the Hugging Face hosted inference API.
#[derive(Clone)]
pub struct HuggingFaceClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl HuggingFaceClient {
    pub fn new(http: reqwest::Client, base_url: &str, model: &str, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceClient {
    async fn generate(&self, prompt: &str, model: Option<&str>) -> Result<String, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GatewayError::MisconfiguredCredential)?;
        let url = format!("{}/models/{}", self.base_url, model.unwrap_or(&self.model));

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&serde_json::json!({ "inputs": prompt }))
            .send()
            .await?;

        if !response.status().is_success() {
            let details = response.text().await.unwrap_or_default();
            return Err(GatewayError::Backend {
                backend: "Hugging Face",
                details,
            });
        }

        let data: Value = response.json().await?;
        Ok(generated_text(&data))
    }
}

/// Pull `[0].generated_text` out of an inference response, or fall back to the
/// serialised body when the shape is anything else.
pub fn generated_text(data: &Value) -> String {
    match data
        .as_array()
        .and_then(|candidates| candidates.first())
        .and_then(|first| first.get("generated_text"))
        .and_then(Value::as_str)
    {
        Some(text) if !text.is_empty() => text.trim().to_string(),
        _ => data.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_candidate_text_is_used() {
        let data = json!([
            { "generated_text": "  About 300 calories.\n" },
            { "generated_text": "ignored" }
        ]);
        assert_eq!(generated_text(&data), "About 300 calories.");
    }

    #[test]
    fn unexpected_shape_returns_raw_json() {
        let data = json!({ "error": "Model is currently loading", "estimated_time": 20.0 });
        assert_eq!(generated_text(&data), data.to_string());

        let empty = json!([]);
        assert_eq!(generated_text(&empty), "[]");
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let client = HuggingFaceClient::new(
            reqwest::Client::new(),
            "http://127.0.0.1:9",
            "some/model",
            None,
        );
        let err = client.generate("hello", None).await.unwrap_err();
        assert!(matches!(err, GatewayError::MisconfiguredCredential));
    }
}
