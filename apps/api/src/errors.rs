use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Lists every route, shown to callers who hit an unknown path.
pub const ENDPOINT_HINT: &str =
    "Verfügbare Endpunkte: /, /health, /knowledge, /knowledge/reload, /ai/sustainability/<message>";

/// Shown alongside advisory failures so the frontend always has something to display.
pub const FALLBACK_RESPONSE: &str = "Entschuldigung, ich konnte deine Nachhaltigkeitsfrage \
    nicht verarbeiten. Versuche es bitte nochmal! 🌱";

pub const SUPPORT_MESSAGE: &str = "Etwas ist schiefgelaufen. Versuche es später nochmal.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The model client was never configured; advisory requests fail fast.
    #[error("Advisory model unavailable")]
    AdvisorUnavailable,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, extra) = match &self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                msg.clone(),
                json!({ "hint": ENDPOINT_HINT }),
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                "Methode für diesen Endpunkt nicht erlaubt".to_string(),
                json!({ "hint": ENDPOINT_HINT }),
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                msg.clone(),
                json!({
                    "hint": ENDPOINT_HINT,
                    "tip": "🌱 Frage mich zu Nachhaltigkeit im Büro!"
                }),
            ),
            AppError::AdvisorUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "ADVISOR_UNAVAILABLE",
                "Gemini API nicht verfügbar".to_string(),
                json!({ "details": "API-Schlüssel fehlt oder ungültig" }),
            ),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    format!("AI-Fehler: {msg}"),
                    json!({ "fallback_response": FALLBACK_RESPONSE }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    format!("Interner Serverfehler: {e}"),
                    json!({ "support": "🌱 GreenBot Support" }),
                )
            }
        };

        let mut body = json!({
            "error": {
                "code": code,
                "message": message
            }
        });
        merge_extra(&mut body, extra);

        (status, Json(body)).into_response()
    }
}

/// Body returned for faults that escaped every handler (panics).
pub fn internal_fault_body() -> Value {
    json!({
        "error": {
            "code": "INTERNAL_ERROR",
            "message": SUPPORT_MESSAGE
        },
        "support": "🌱 GreenBot Support"
    })
}

fn merge_extra(body: &mut Value, extra: Value) {
    if let (Some(body), Value::Object(extra)) = (body.as_object_mut(), extra) {
        body.extend(extra);
    }
}
