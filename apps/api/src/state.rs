use std::sync::Arc;

use crate::config::Config;
use crate::negotiation::orchestrator::ResponseOrchestrator;
use crate::negotiation::store::ContextStore;
use crate::resume::parser::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// In-memory negotiation registry. Process lifetime only — nothing persists.
    pub store: Arc<ContextStore>,
    pub orchestrator: ResponseOrchestrator,
    pub resume_parser: ResumeParser,
}
