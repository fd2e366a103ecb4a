use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Category;
use crate::services::ai::Message;
use crate::services::search::{self, SearchResult};
use crate::state::AppState;

// POST /api/search
#[derive(Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub category: Option<Category>,
    #[serde(default)]
    pub history: Vec<Message>,
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResult>, AppError> {
    let result = search::search(
        state.llm.as_ref(),
        &payload.query,
        payload.category,
        &payload.history,
    )
    .await?;
    Ok(Json(result))
}
