use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports liveness, model availability and the loaded knowledge categories.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let knowledge = state.knowledge.snapshot();

    Json(json!({
        "status": "🌱 healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "gemini_available": state.advisor.is_some(),
        "gemini_model": state.config.gemini_model,
        "knowledge_base_loaded": !knowledge.is_empty(),
        "knowledge_source": state.knowledge.path().display().to_string(),
        "categories_loaded": knowledge.categories(),
        "timestamp": Utc::now().to_rfc3339()
    }))
}
