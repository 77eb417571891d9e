use super::{ensure_success, http_client, ChatMessage, CompletionProvider, CompletionRequest, Role};
use crate::config::{AnthropicConfig, ANTHROPIC_API_KEY_ENV};
use crate::utils::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: Vec<&'a ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Client for the Anthropic Messages API
pub struct AnthropicClient {
    client: Client,
    base_url: String,
    api_version: String,
    api_key: Option<String>,
}

impl AnthropicClient {
    pub fn new(config: &AnthropicConfig) -> AppResult<Self> {
        Ok(Self {
            client: http_client(config.timeout_secs)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            api_key: config.resolved_api_key(),
        })
    }

    fn build_body<'a>(&self, request: &'a CompletionRequest) -> MessagesRequest<'a> {
        // The Messages API takes the system prompt out of band
        let system = request.system.as_deref().or_else(|| {
            request
                .messages
                .iter()
                .find(|m| m.role == Role::System)
                .map(|m| m.content.as_str())
        });

        MessagesRequest {
            model: &request.model,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            system,
            messages: request
                .messages
                .iter()
                .filter(|m| m.role != Role::System)
                .collect(),
        }
    }
}

fn extract_text(response: MessagesResponse) -> AppResult<String> {
    response
        .content
        .into_iter()
        .find(|block| block.kind == "text")
        .and_then(|block| block.text)
        .ok_or_else(|| AppError::Provider("Response contained no text content".to_string()))
}

#[async_trait]
impl CompletionProvider for AnthropicClient {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn complete(&self, request: &CompletionRequest) -> AppResult<String> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            AppError::Config(format!(
                "Anthropic API key not found. Set it in config or use the {} environment variable",
                ANTHROPIC_API_KEY_ENV
            ))
        })?;

        let url = format!("{}/v1/messages", self.base_url);
        debug!(provider = "anthropic", model = %request.model, "POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", api_key)
            .header("anthropic-version", &self.api_version)
            .json(&self.build_body(request))
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to reach Anthropic: {}", e)))?;

        let response = ensure_success(response, "Anthropic messages request").await?;

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("Failed to parse Anthropic response: {}", e)))?;

        extract_text(body)
    }
}
