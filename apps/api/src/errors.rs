use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::negotiation::models::NegotiationStrategy;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Negotiation context not found: {0}")]
    ContextNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No response template available for strategy '{}'", .0.as_str())]
    NoTemplateAvailable(NegotiationStrategy),

    #[error("Template references unknown variable '{0}'")]
    TemplateVariable(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::ContextNotFound(id) => (
                StatusCode::NOT_FOUND,
                "CONTEXT_NOT_FOUND",
                format!("Negotiation context not found: {id}"),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::NoTemplateAvailable(strategy) => {
                // Catalog misconfiguration — every strategy must have at least one template.
                tracing::error!("No templates for strategy '{}'", strategy.as_str());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "NO_TEMPLATE_AVAILABLE",
                    format!(
                        "No response template available for strategy '{}'",
                        strategy.as_str()
                    ),
                )
            }
            AppError::TemplateVariable(var) => {
                // Catalog authoring bug — a template references a placeholder
                // with no registered default.
                tracing::error!("Template references unknown variable '{var}'");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TEMPLATE_VARIABLE_ERROR",
                    format!("Template references unknown variable '{var}'"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
