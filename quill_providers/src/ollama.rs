use std::time::Duration;

use async_trait::async_trait;
use quill_core::LLMProvider;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Base URL of a default local Ollama install.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Client for a locally hosted Ollama server.
///
/// Uses the non-streaming `/api/generate` endpoint: one prompt in, one
/// block of text out. The call blocks until the server answers or the
/// client timeout fires; there is no cancellation beyond that.
pub struct OllamaProvider {
    client: Client,
    base_url: String,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[derive(Debug, Deserialize)]
struct VersionResponse {
    #[serde(default)]
    version: String,
}

impl OllamaProvider {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        info!("Creating OllamaProvider");
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(300))
                .connect_timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            temperature: 0.7,
        }
    }

    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check whether the server is reachable, returning its version.
    pub async fn probe(&self) -> anyhow::Result<String> {
        let response: VersionResponse = self
            .client
            .get(format!("{}/api/version", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.version)
    }
}

#[async_trait]
impl LLMProvider for OllamaProvider {
    async fn complete(&self, prompt: &str, model: &str) -> anyhow::Result<String> {
        let request = GenerateRequest {
            model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
            },
        };

        let url = format!("{}/api/generate", self.base_url);
        debug!(
            "Ollama request: url={url} model={model} prompt_len={}",
            prompt.len()
        );

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Ollama API error ({status}): {}. Is the Ollama server running?",
                body.trim()
            );
        }

        let parsed: GenerateResponse = response.json().await?;
        debug!("Ollama response: {} chars", parsed.response.len());

        Ok(parsed.response)
    }

    fn default_model(&self) -> &str {
        "llama3.2"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let provider = OllamaProvider::new("http://localhost:11434/");
        assert_eq!(provider.base_url(), "http://localhost:11434");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn generate_request_has_expected_wire_shape() {
        let request = GenerateRequest {
            model: "llama3.2",
            prompt: "Question: hi",
            stream: false,
            options: GenerateOptions { temperature: 0.7 },
        };

        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value["model"], "llama3.2");
        assert_eq!(value["prompt"], "Question: hi");
        assert_eq!(value["stream"], false);
        assert!(value["options"]["temperature"].is_number());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn generate_response_tolerates_extra_fields() {
        let body = r#"{"model":"llama3.2","response":"hello","done":true,"total_duration":1}"#;
        let parsed: GenerateResponse = serde_json::from_str(body).expect("deserialize");
        assert_eq!(parsed.response, "hello");
    }
}
