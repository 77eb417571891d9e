//! WiseWords Advisor - consult hosted LLMs about a web project
//!
//! Builds fixed French prompts from the project's component sources, sends
//! them to Anthropic or OpenAI, and writes each answer to a markdown report.

pub mod cli;
pub mod config;
pub mod core;
pub mod manager;
pub mod prompts;
pub mod provider;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    advisor::{Advisor, ModelPolicy},
    consultation::{Consultation, Suite},
    report::write_markdown,
};
pub use crate::provider::{ChatMessage, CompletionProvider, CompletionRequest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
