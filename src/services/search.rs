use serde::Serialize;

use crate::errors::AppError;
use crate::models::{CandidateOption, Category};
use crate::services::ai::agent::ask_travel_agent;
use crate::services::ai::{LlmProvider, Message};
use crate::services::extractor::extract_options;

#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub category: Category,
    pub reply: String,
    pub options: Vec<CandidateOption>,
}

/// Ask the assistant and mine its reply for bookable options. The category
/// is detected from the query unless the caller pins one.
pub async fn search(
    llm: &dyn LlmProvider,
    query: &str,
    category: Option<Category>,
    history: &[Message],
) -> Result<SearchResult, AppError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::Validation("query must not be empty".to_string()));
    }

    let category = category.unwrap_or_else(|| Category::detect(query));

    let reply = ask_travel_agent(llm, history, query, category)
        .await
        .map_err(|e| AppError::Ai(format!("{e:#}")))?;

    let options = extract_options(&reply, category);

    tracing::info!(
        category = %category,
        options = options.len(),
        reply_chars = reply.len(),
        "travel search completed"
    );

    Ok(SearchResult {
        category,
        reply,
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct CannedLlm(&'static str);

    #[async_trait]
    impl LlmProvider for CannedLlm {
        async fn chat(&self, _system_prompt: &str, _messages: &[Message]) -> anyhow::Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingLlm;

    #[async_trait]
    impl LlmProvider for FailingLlm {
        async fn chat(&self, _system_prompt: &str, _messages: &[Message]) -> anyhow::Result<String> {
            anyhow::bail!("connection refused")
        }
    }

    #[tokio::test]
    async fn test_search_detects_category() {
        let llm = CannedLlm("1. Harbor Inn in Cork - $140 per night\n2. Cliff Resort in Kerry - $210");
        let result = search(&llm, "hotels in Ireland", None, &[]).await.unwrap();
        assert_eq!(result.category, Category::Hotels);
        assert_eq!(result.options.len(), 2);
        assert_eq!(result.options[0].name, "Harbor Inn");
        assert_eq!(result.options[0].destination, "Cork");
        assert_eq!(result.options[1].price, 210);
    }

    #[tokio::test]
    async fn test_search_explicit_category_wins() {
        let llm = CannedLlm("Schengen Visa costs $90.");
        let result = search(&llm, "trip to Paris", Some(Category::Visas), &[])
            .await
            .unwrap();
        assert_eq!(result.category, Category::Visas);
        assert_eq!(result.options[0].price, 90);
    }

    #[tokio::test]
    async fn test_search_rejects_empty_query() {
        let err = search(&CannedLlm(""), "   ", None, &[]).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_search_maps_provider_failure() {
        let err = search(&FailingLlm, "flights to Lima", None, &[])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Ai(_)));
    }
}
