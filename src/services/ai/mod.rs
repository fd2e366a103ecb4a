pub mod agent;
pub mod groq;
pub mod ollama;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::errors::AppError;

use self::groq::GroqProvider;
use self::ollama::OllamaProvider;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A hosted chat-completion endpoint.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn chat(&self, system_prompt: &str, messages: &[Message]) -> anyhow::Result<String>;
}

/// Build the provider named by `LLM_PROVIDER`.
pub fn provider_from_config(config: &AppConfig) -> Result<Box<dyn LlmProvider>, AppError> {
    match config.llm_provider.as_str() {
        "groq" => {
            if config.groq_api_key.is_empty() {
                return Err(AppError::Config(
                    "GROQ_API_KEY must be set when LLM_PROVIDER=groq".to_string(),
                ));
            }
            tracing::info!("using Groq LLM provider (model: {})", config.groq_model);
            Ok(Box::new(GroqProvider::new(
                config.groq_api_key.clone(),
                config.groq_model.clone(),
            )))
        }
        "ollama" => {
            tracing::info!(
                "using Ollama LLM provider (url: {}, model: {})",
                config.ollama_url,
                config.ollama_model
            );
            Ok(Box::new(OllamaProvider::new(
                config.ollama_url.clone(),
                config.ollama_model.clone(),
            )))
        }
        other => Err(AppError::Config(format!(
            "unknown LLM_PROVIDER: {other} (expected groq or ollama)"
        ))),
    }
}

/// System prompt first, then the conversation in order.
fn chat_payload(system_prompt: &str, messages: &[Message]) -> Vec<Value> {
    std::iter::once(json!({ "role": "system", "content": system_prompt }))
        .chain(
            messages
                .iter()
                .map(|m| json!({ "role": m.role, "content": m.content })),
        )
        .collect()
}
