use axum::Json;
use serde::Deserialize;

use crate::models::{CandidateOption, Category};
use crate::services::extractor::extract_options;

// POST /api/extract
#[derive(Deserialize)]
pub struct ExtractRequest {
    pub text: String,
    pub category: Category,
}

pub async fn extract(Json(payload): Json<ExtractRequest>) -> Json<Vec<CandidateOption>> {
    Json(extract_options(&payload.text, payload.category))
}
