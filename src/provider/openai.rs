use super::{ensure_success, http_client, ChatMessage, CompletionProvider, CompletionRequest};
use crate::config::{OpenAiConfig, OPENAI_API_KEY_ENV};
use crate::utils::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for OpenAI-compatible chat completion endpoints
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: &OpenAiConfig) -> AppResult<Self> {
        Ok(Self {
            client: http_client(config.timeout_secs)?,
            base_url: config.resolved_base_url().trim_end_matches('/').to_string(),
            api_key: config.resolved_api_key(),
        })
    }

    fn build_body<'a>(&self, request: &'a CompletionRequest) -> ChatCompletionRequest<'a> {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        if let Some(system) = &request.system {
            messages.push(ChatMessage::system(system.clone()));
        }
        messages.extend(request.messages.iter().cloned());

        ChatCompletionRequest {
            model: &request.model,
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

fn extract_text(response: ChatCompletionResponse) -> AppResult<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            AppError::Provider("Missing choices[0].message.content in chat completion".to_string())
        })
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> AppResult<String> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            AppError::Config(format!(
                "OpenAI API key not found. Set it in config or use the {} environment variable",
                OPENAI_API_KEY_ENV
            ))
        })?;

        let url = format!("{}/chat/completions", self.base_url);
        debug!(provider = "openai", model = %request.model, "POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&self.build_body(request))
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to reach OpenAI: {}", e)))?;

        let response = ensure_success(response, "Chat completion request").await?;

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("Failed to parse chat completion: {}", e)))?;

        extract_text(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::testing::{closed_port, local_client, serve_once};
    use crate::provider::Role;

    fn local(base_url: String) -> OpenAiClient {
        OpenAiClient {
            client: local_client(),
            base_url: format!("{}/v1", base_url),
            api_key: Some("sk-test".to_string()),
        }
    }

    fn question() -> CompletionRequest {
        CompletionRequest {
            model: "gpt-5".to_string(),
            system: None,
            messages: vec![ChatMessage::user("question")],
            max_tokens: 10,
            temperature: 0.7,
        }
    }

    #[test]
    fn test_body_puts_system_prompt_first() {
        let client = OpenAiClient {
            client: Client::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: Some("sk-test".to_string()),
        };
        let request = CompletionRequest {
            model: "gpt-5".to_string(),
            system: Some("persona".to_string()),
            messages: vec![ChatMessage::user("question")],
            max_tokens: 4000,
            temperature: 0.7,
        };

        let json = serde_json::to_value(client.build_body(&request)).unwrap();
        assert_eq!(json["model"], "gpt-5");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "persona");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["max_tokens"], 4000);
    }

    #[test]
    fn test_extract_text_reads_first_choice() {
        let body: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"Salut"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(body).unwrap(), "Salut");

        let refused: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#)
                .unwrap();
        assert!(extract_text(refused).is_err());

        let empty: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(extract_text(empty).is_err());
    }

    #[test]
    fn test_assistant_role_serializes() {
        let msg = ChatMessage {
            role: Role::Assistant,
            content: "earlier answer".to_string(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "assistant");
    }

    #[tokio::test]
    async fn test_request_uses_bearer_auth() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"choices":[{"message":{"role":"assistant","content":"Salut"}}]}"#,
        )
        .await;

        let text = local(base_url).complete(&question()).await.unwrap();
        assert_eq!(text, "Salut");

        let raw = server.await.unwrap().to_lowercase();
        assert!(raw.starts_with("post /v1/chat/completions "));
        assert!(raw.contains("authorization: bearer sk-test"));
    }

    #[tokio::test]
    async fn test_error_status_becomes_provider_error_with_body() {
        let (base_url, server) = serve_once("404 Not Found", r#"{"error":"model_not_found"}"#).await;

        let err = local(base_url).complete(&question()).await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, AppError::Provider(_)));
        assert_eq!(
            err.to_string(),
            r#"Provider error: Chat completion request failed: 404 Not Found - {"error":"model_not_found"}"#
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_network_error() {
        let err = local(closed_port().await).complete(&question()).await.unwrap_err();
        assert!(matches!(err, AppError::Network(_)));
    }
}
