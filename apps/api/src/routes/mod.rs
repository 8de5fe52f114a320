pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};

use crate::negotiation::handlers;
use crate::resume::handlers::handle_parse_resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_resume_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Negotiation API
        .route(
            "/api/v1/negotiations",
            post(handlers::handle_create_negotiation),
        )
        .route("/api/v1/negotiations/:id", get(handlers::handle_get_status))
        .route(
            "/api/v1/negotiations/:id/responses",
            post(handlers::handle_generate_response),
        )
        .route(
            "/api/v1/negotiations/:id/strategy",
            patch(handlers::handle_update_strategy),
        )
        .route(
            "/api/v1/negotiations/:id/leverage",
            post(handlers::handle_add_leverage_point),
        )
        .route("/api/v1/strategies", get(handlers::handle_list_strategies))
        // Resume API
        .route("/api/v1/resumes/parse", post(handle_parse_resume))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
