//! Fetch advice from a provider without ever failing
//!
//! Provider errors are turned into report text so that every consultation
//! still produces its markdown file.

use tracing::{error, info, warn};

use crate::config::{AnthropicConfig, OpenAiConfig};
use crate::prompts::RenderedPrompt;
use crate::provider::CompletionProvider;

pub const CLAUDE_ERROR_PREFIX: &str = "Erreur lors de la consultation de Claude";
pub const CONSULTATION_ERROR_PREFIX: &str = "Erreur lors de la consultation";
pub const FALLBACK_ERROR_PREFIX: &str = "Erreur fallback";

#[derive(Debug, Clone, PartialEq)]
pub enum ModelPolicy {
    Single {
        model: String,
    },
    WithFallback {
        primary: String,
        fallback: String,
        /// Shown as `[UTILISANT <label>]` above fallback answers
        label: String,
    },
}

pub struct Advisor {
    provider: Box<dyn CompletionProvider>,
    policy: ModelPolicy,
    max_tokens: u32,
    temperature: f64,
    error_prefix: &'static str,
}

impl Advisor {
    pub fn new(
        provider: Box<dyn CompletionProvider>,
        policy: ModelPolicy,
        max_tokens: u32,
        temperature: f64,
        error_prefix: &'static str,
    ) -> Self {
        Self {
            provider,
            policy,
            max_tokens,
            temperature,
            error_prefix,
        }
    }

    pub fn for_claude(provider: Box<dyn CompletionProvider>, config: &AnthropicConfig) -> Self {
        Self::new(
            provider,
            ModelPolicy::Single {
                model: config.model.clone(),
            },
            config.max_tokens,
            config.temperature,
            CLAUDE_ERROR_PREFIX,
        )
    }

    pub fn for_codex(provider: Box<dyn CompletionProvider>, config: &OpenAiConfig) -> Self {
        let policy = match &config.fallback_model {
            Some(fallback) => ModelPolicy::WithFallback {
                primary: config.model.clone(),
                fallback: fallback.clone(),
                label: config.fallback_label.clone(),
            },
            None => ModelPolicy::Single {
                model: config.model.clone(),
            },
        };
        Self::new(
            provider,
            policy,
            config.max_tokens,
            config.temperature,
            CONSULTATION_ERROR_PREFIX,
        )
    }

    pub fn policy(&self) -> &ModelPolicy {
        &self.policy
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Send `prompt` and return the answer, or a description of what went wrong
    pub async fn fetch_advice(&self, prompt: &RenderedPrompt) -> String {
        match &self.policy {
            ModelPolicy::Single { model } => {
                let request = prompt.to_request(model, self.max_tokens, self.temperature);
                match self.provider.complete(&request).await {
                    Ok(text) => {
                        info!(provider = self.provider.name(), %model, "advice received");
                        text
                    }
                    Err(e) => {
                        error!(provider = self.provider.name(), %model, error = %e, "consultation failed");
                        format!("{}: {}", self.error_prefix, e)
                    }
                }
            }
            ModelPolicy::WithFallback {
                primary,
                fallback,
                label,
            } => {
                let request = prompt.to_request(primary, self.max_tokens, self.temperature);
                let primary_err = match self.provider.complete(&request).await {
                    Ok(text) => {
                        info!(provider = self.provider.name(), model = %primary, "advice received");
                        return text;
                    }
                    Err(e) => e,
                };

                warn!(
                    provider = self.provider.name(),
                    model = %primary,
                    fallback = %fallback,
                    error = %primary_err,
                    "primary model failed, retrying with fallback"
                );

                match self.provider.complete(&request.with_model(fallback)).await {
                    Ok(text) => {
                        info!(provider = self.provider.name(), model = %fallback, "advice received from fallback");
                        format!("[UTILISANT {}]\n\n{}", label, text)
                    }
                    Err(fallback_err) => {
                        error!(
                            provider = self.provider.name(),
                            error = %fallback_err,
                            "fallback model failed too"
                        );
                        format!(
                            "{}: {}\n{}: {}",
                            self.error_prefix, primary_err, FALLBACK_ERROR_PREFIX, fallback_err
                        )
                    }
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedProvider;
    use super::*;
    use crate::config::Config;
    use crate::utils::error::AppError;

    fn prompt() -> RenderedPrompt {
        RenderedPrompt {
            system: Some("persona".to_string()),
            user: "question".to_string(),
        }
    }

    #[tokio::test]
    async fn test_single_model_success_returns_text_verbatim() {
        let config = Config::default();
        let advisor = Advisor::for_claude(
            Box::new(ScriptedProvider::new(vec![Ok("## Conseils\n".to_string())])),
            &config.anthropic,
        );
        assert_eq!(advisor.fetch_advice(&prompt()).await, "## Conseils\n");
    }

    #[tokio::test]
    async fn test_single_model_error_becomes_text() {
        let config = Config::default();
        let advisor = Advisor::for_claude(
            Box::new(ScriptedProvider::new(vec![Err(AppError::Provider(
                "529 overloaded".to_string(),
            ))])),
            &config.anthropic,
        );
        assert_eq!(
            advisor.fetch_advice(&prompt()).await,
            "Erreur lors de la consultation de Claude: Provider error: 529 overloaded"
        );
    }

    #[tokio::test]
    async fn test_fallback_success_is_labelled() {
        let config = Config::default();
        let provider = ScriptedProvider::new(vec![
            Err(AppError::Provider("model gpt-5 not found".to_string())),
            Ok("Voici le code".to_string()),
        ]);
        let requests = provider.requests.clone();
        let advisor = Advisor::for_codex(Box::new(provider), &config.openai);

        let advice = advisor.fetch_advice(&prompt()).await;
        assert_eq!(advice, "[UTILISANT GPT-4 TURBO]\n\nVoici le code");

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].model, "gpt-5");
        assert_eq!(requests[1].model, "gpt-4-turbo-preview");
        assert_eq!(requests[1].messages, requests[0].messages);
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let config = Config::default();
        let provider = ScriptedProvider::new(vec![Ok("direct".to_string())]);
        let requests = provider.requests.clone();
        let advisor = Advisor::for_codex(Box::new(provider), &config.openai);

        assert_eq!(advisor.fetch_advice(&prompt()).await, "direct");
        assert_eq!(requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_double_failure_reports_both_errors() {
        let config = Config::default();
        let advisor = Advisor::for_codex(
            Box::new(ScriptedProvider::new(vec![
                Err(AppError::Provider("primary down".to_string())),
                Err(AppError::Network("fallback down".to_string())),
            ])),
            &config.openai,
        );
        assert_eq!(
            advisor.fetch_advice(&prompt()).await,
            "Erreur lors de la consultation: Provider error: primary down\n\
             Erreur fallback: Network error: fallback down"
        );
    }

    #[tokio::test]
    async fn test_codex_without_fallback_uses_single_policy() {
        let mut config = Config::default();
        config.openai.fallback_model = None;
        let advisor = Advisor::for_codex(Box::new(ScriptedProvider::always_failing()), &config.openai);

        assert!(matches!(advisor.policy(), ModelPolicy::Single { .. }));
        assert_eq!(
            advisor.fetch_advice(&prompt()).await,
            "Erreur lors de la consultation: Network error: connection refused"
        );
    }
}
