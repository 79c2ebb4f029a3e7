//! Axum route handlers for the Advisory API.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde::Serialize;

use crate::advisory::advisor::advise;
use crate::errors::AppError;
use crate::models::advisory::AdvisoryResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AdvisoryResponse {
    pub response: AdvisoryResult,
}

/// GET /ai/sustainability/*message
///
/// A message that does not decode to UTF-8 is a 400. Fails fast with 503 when
/// no model client was configured at startup.
/// The knowledge base is read once, so a concurrent reload cannot change it mid-request.
pub async fn handle_sustainability(
    State(state): State<AppState>,
    message: Result<Path<String>, PathRejection>,
) -> Result<Json<AdvisoryResponse>, AppError> {
    let Path(message) =
        message.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let advisor = state.advisor.as_ref().ok_or(AppError::AdvisorUnavailable)?;

    let knowledge = state.knowledge.snapshot();
    let advisory = advise(advisor.as_ref(), &knowledge, &message).await?;

    Ok(Json(AdvisoryResponse {
        response: advisory.into_result(),
    }))
}
