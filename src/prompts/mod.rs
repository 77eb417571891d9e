//! Prompt templates for both consultation suites
//!
//! Templates are French, like the reports they produce.

pub mod claude;
pub mod codex;

use crate::provider::{ChatMessage, CompletionRequest};

/// A prompt ready to be sent: optional system persona plus the user message
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPrompt {
    pub system: Option<String>,
    pub user: String,
}

impl RenderedPrompt {
    pub fn to_request(&self, model: &str, max_tokens: u32, temperature: f64) -> CompletionRequest {
        CompletionRequest {
            model: model.to_string(),
            system: self.system.clone(),
            messages: vec![ChatMessage::user(self.user.clone())],
            max_tokens,
            temperature,
        }
    }
}
