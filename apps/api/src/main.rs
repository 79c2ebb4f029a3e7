mod advisory;
mod config;
mod errors;
mod knowledge;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::knowledge::store::KnowledgeStore;
use crate::llm_client::{AdvisoryModel, GeminiClient};
use crate::routes::{build_router, panic_response};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🌱 Starting GreenBot v{}", env!("CARGO_PKG_VERSION"));

    // Load knowledge base (falls back to built-in defaults, never fails)
    let knowledge = Arc::new(KnowledgeStore::open(config.knowledge_path.clone()));
    let snapshot = knowledge.snapshot();
    info!(
        "Knowledge base: {} categories ({})",
        snapshot.len(),
        snapshot.categories().join(", ")
    );

    // Initialize the model client; without a credential the advisory endpoint stays disabled
    let advisor = build_advisor(&config);

    let state = AppState {
        config: Arc::new(config.clone()),
        knowledge,
        advisor,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_advisor(config: &Config) -> Option<Arc<dyn AdvisoryModel>> {
    let Some(api_key) = config.gemini_api_key.clone() else {
        warn!("GEMINI_API_KEY not set; advisory endpoint disabled");
        return None;
    };

    match GeminiClient::new(
        api_key,
        config.gemini_model.clone(),
        config.gemini_timeout,
    ) {
        Ok(client) => {
            info!(
                "LLM client initialized (model: {}, timeout: {}s)",
                client.model_name(),
                config.gemini_timeout.as_secs()
            );
            Some(Arc::new(client))
        }
        Err(e) => {
            warn!("Failed to initialize LLM client: {e}; advisory endpoint disabled");
            None
        }
    }
}
