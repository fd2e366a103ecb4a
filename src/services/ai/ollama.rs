use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use super::{chat_payload, LlmProvider, Message};

pub struct OllamaProvider {
    url: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaProvider {
    pub fn new(url: String, model: String) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            model,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    async fn chat(&self, system_prompt: &str, messages: &[Message]) -> anyhow::Result<String> {
        let body = json!({
            "model": self.model,
            "messages": chat_payload(system_prompt, messages),
            "stream": false,
        });

        let resp = self
            .client
            .post(format!("{}/api/chat", self.url))
            .json(&body)
            .send()
            .await
            .with_context(|| format!("failed to reach Ollama at {}", self.url))?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse Ollama response")?;

        if !status.is_success() {
            anyhow::bail!("Ollama error ({}): {}", status, data["error"]);
        }

        data["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("missing content in Ollama response"))
    }
}
