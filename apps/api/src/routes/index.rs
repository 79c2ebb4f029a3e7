use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Service metadata and the endpoint list.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "🌱 GreenBot - Nachhaltigkeits-Assistent",
        "version": env!("CARGO_PKG_VERSION"),
        "purpose": "Hilft bei nachhaltigen Entscheidungen im Büroalltag",
        "endpoints": {
            "/": "API Information",
            "/ai/sustainability/<message>": "Nachhaltigkeits-Beratung",
            "/knowledge": "Wissensdatenbank anzeigen",
            "/knowledge/reload": "Wissensdatenbank neu laden",
            "/health": "Health Check"
        },
        "status": "🌿 Bereit für grüne Beratung"
    }))
}
