use std::sync::Arc;

use crate::config::Config;
use crate::knowledge::store::KnowledgeStore;
use crate::llm_client::AdvisoryModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub knowledge: Arc<KnowledgeStore>,
    /// `None` when no credential was configured at startup; advisory requests then fail fast.
    pub advisor: Option<Arc<dyn AdvisoryModel>>,
}
