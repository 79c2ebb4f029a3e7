pub mod health;
pub mod index;

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::error;

use crate::advisory::handlers as advisory;
use crate::errors::{internal_fault_body, AppError};
use crate::knowledge::handlers as knowledge;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("Endpoint nicht gefunden".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        // Knowledge API
        .route("/knowledge", get(knowledge::handle_get_knowledge))
        .route("/knowledge/reload", post(knowledge::handle_reload_knowledge))
        // Advisory API
        .route(
            "/ai/sustainability/*message",
            get(advisory::handle_sustainability),
        )
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

/// Converts a handler panic into the fixed 500 support body.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Handler panicked: {detail}");

    (StatusCode::INTERNAL_SERVER_ERROR, Json(internal_fault_body())).into_response()
}
