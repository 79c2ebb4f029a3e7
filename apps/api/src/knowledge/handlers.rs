//! Axum route handlers for the Knowledge API.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::knowledge::KnowledgeBase;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct KnowledgeResponse {
    pub knowledge_base: KnowledgeBase,
    pub categories: Vec<String>,
    pub total_entries: usize,
    pub source: String,
}

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub message: String,
    pub old_categories: usize,
    pub new_categories: usize,
    pub categories: Vec<String>,
    pub timestamp: String,
}

/// GET /knowledge
pub async fn handle_get_knowledge(State(state): State<AppState>) -> Json<KnowledgeResponse> {
    let knowledge = state.knowledge.snapshot();

    Json(KnowledgeResponse {
        categories: knowledge.categories(),
        total_entries: knowledge.total_entries(),
        knowledge_base: (*knowledge).clone(),
        source: state.knowledge.path().display().to_string(),
    })
}

/// POST /knowledge/reload
pub async fn handle_reload_knowledge(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, AppError> {
    let summary = state.knowledge.reload().await?;

    Ok(Json(ReloadResponse {
        message: "✅ Wissensdatenbank erfolgreich neu geladen".to_string(),
        old_categories: summary.old_categories,
        new_categories: summary.new_categories,
        categories: summary.categories,
        timestamp: Utc::now().to_rfc3339(),
    }))
}
