//! OpenAI provider implementation

use super::convert::{from_openai_response, to_openai_request};
use super::types::{OpenAiConfig, OpenAiResponse};
use crate::error::{Error, Result};
use crate::provider::Provider;
use crate::types::{GenerateRequest, GenerateResponse, Headers};
use async_trait::async_trait;
use reqwest::Client;

/// OpenAI Chat Completions provider
pub struct OpenAiProvider {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiProvider {
    /// Environment variable for API key
    pub const API_KEY_ENV: &'static str = "OPENAI_API_KEY";
    /// Environment variable for an alternate endpoint
    pub const BASE_URL_ENV: &'static str = "OPENAI_BASE_URL";

    /// Create a new provider. A missing key is not an error until a request is made.
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { config, client })
    }

    /// Create provider from environment
    pub fn from_env() -> Result<Self> {
        let mut config = OpenAiConfig::new(std::env::var(Self::API_KEY_ENV).ok());
        if let Ok(base_url) = std::env::var(Self::BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }
        Self::new(config)
    }

    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn provider_id(&self) -> &str {
        "openai"
    }

    fn build_headers(&self, custom_headers: Option<&Headers>) -> Headers {
        let mut headers = Headers::new();
        if let Some(key) = &self.config.api_key {
            headers.insert("Authorization", format!("Bearer {}", key));
        }
        headers.insert("Content-Type", "application/json");

        if let Some(custom) = custom_headers {
            headers.merge_with(custom);
        }

        headers
    }

    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        if self.config.api_key.is_none() {
            return Err(Error::missing_api_key(self.provider_id(), Self::API_KEY_ENV));
        }

        let url = format!("{}chat/completions", self.config.base_url);
        let body = to_openai_request(&request);
        let headers = self
            .build_headers(request.options.headers.as_ref())
            .to_reqwest_headers()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            provider = self.provider_id(),
            model = %body.model,
            messages = body.messages.len(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            #[cfg(feature = "tracing")]
            tracing::warn!(status = status.as_u16(), "chat completion request rejected");
            return Err(Error::Api {
                provider: self.provider_id().to_string(),
                status: status.as_u16(),
                body: error_text,
            });
        }

        let raw = response.text().await?;
        let parsed: OpenAiResponse = serde_json::from_str(&raw)
            .map_err(|e| Error::invalid_response(format!("malformed OpenAI envelope: {e}")))?;
        let unified = from_openai_response(parsed)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            completion_tokens = unified.usage.completion_tokens,
            finish_reason = ?unified.finish_reason.unified,
            "chat completion received"
        );

        Ok(unified)
    }
}
