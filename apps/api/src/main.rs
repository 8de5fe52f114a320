mod config;
mod errors;
mod llm_client;
mod negotiation;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::negotiation::analyzer::LlmTacticAnalyzer;
use crate::negotiation::catalog::TemplateCatalog;
use crate::negotiation::enhancer::LlmResponseEnhancer;
use crate::negotiation::orchestrator::ResponseOrchestrator;
use crate::negotiation::store::ContextStore;
use crate::resume::parser::ResumeParser;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Parley API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Load the template catalog once; read-only from here on
    let catalog = Arc::new(TemplateCatalog::builtin());
    info!("Template catalog loaded ({} templates)", catalog.len());

    // In-memory context store — negotiations live for the process lifetime
    let store = Arc::new(ContextStore::new());

    // Wire the orchestrator with the Claude-backed capabilities
    let orchestrator = ResponseOrchestrator::new(
        store.clone(),
        catalog.clone(),
        Arc::new(LlmTacticAnalyzer::new(llm.clone())),
        Arc::new(LlmResponseEnhancer::new(llm.clone())),
    );

    let resume_parser = ResumeParser::new(llm);

    // Build app state
    let state = AppState {
        config: config.clone(),
        store,
        orchestrator,
        resume_parser,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
