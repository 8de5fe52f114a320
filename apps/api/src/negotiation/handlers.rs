use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::negotiation::models::{
    CandidateProfile, NegotiationStatus, NegotiationStrategy, OfferDetails,
};
use crate::negotiation::orchestrator::GeneratedResponse;
use crate::negotiation::store::CreateContextParams;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateNegotiationRequest {
    pub company_name: String,
    pub position: String,
    pub user_profile: CandidateProfile,
    #[serde(default)]
    pub target_salary: Option<i64>,
    #[serde(default)]
    pub target_benefits: Vec<String>,
    #[serde(default)]
    pub deal_breakers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateNegotiationResponse {
    pub context_id: String,
}

/// POST /api/v1/negotiations
pub async fn handle_create_negotiation(
    State(state): State<AppState>,
    Json(req): Json<CreateNegotiationRequest>,
) -> Result<(StatusCode, Json<CreateNegotiationResponse>), AppError> {
    if req.company_name.trim().is_empty() {
        return Err(AppError::Validation("company_name must not be empty".to_string()));
    }
    if req.position.trim().is_empty() {
        return Err(AppError::Validation("position must not be empty".to_string()));
    }

    let context_id = state
        .store
        .create(CreateContextParams {
            company_name: req.company_name,
            position: req.position,
            user_profile: req.user_profile,
            target_salary: req.target_salary,
            target_benefits: req.target_benefits,
            deal_breakers: req.deal_breakers,
        })
        .await;

    Ok((
        StatusCode::CREATED,
        Json(CreateNegotiationResponse { context_id }),
    ))
}

/// GET /api/v1/negotiations/:id
pub async fn handle_get_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NegotiationStatus>, AppError> {
    Ok(Json(state.store.status(&id).await?))
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponseRequest {
    pub message: String,
    #[serde(default)]
    pub offer_details: Option<OfferDetails>,
}

/// POST /api/v1/negotiations/:id/responses
pub async fn handle_generate_response(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<GenerateResponseRequest>,
) -> Result<Json<GeneratedResponse>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be empty".to_string()));
    }
    let generated = state
        .orchestrator
        .generate_response(&id, &req.message, req.offer_details)
        .await?;
    Ok(Json(generated))
}

#[derive(Debug, Deserialize)]
pub struct UpdateStrategyRequest {
    pub strategy: NegotiationStrategy,
}

/// PATCH /api/v1/negotiations/:id/strategy
pub async fn handle_update_strategy(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStrategyRequest>,
) -> Result<StatusCode, AppError> {
    state.store.update_strategy(&id, req.strategy).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct AddLeverageRequest {
    pub leverage_point: String,
}

/// POST /api/v1/negotiations/:id/leverage
pub async fn handle_add_leverage_point(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AddLeverageRequest>,
) -> Result<StatusCode, AppError> {
    if req.leverage_point.trim().is_empty() {
        return Err(AppError::Validation(
            "leverage_point must not be empty".to_string(),
        ));
    }
    state.store.add_leverage_point(&id, req.leverage_point).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub struct StrategyInfo {
    pub value: &'static str,
    pub name: String,
}

/// GET /api/v1/strategies
pub async fn handle_list_strategies() -> Json<Vec<StrategyInfo>> {
    Json(
        NegotiationStrategy::ALL
            .iter()
            .map(|s| StrategyInfo {
                value: s.as_str(),
                name: s.display_name(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_accepts_optional_offer() {
        let req: GenerateResponseRequest = serde_json::from_str(
            r#"{"message": "We need an answer by Friday.", "offer_details": {"salary": 85000}}"#,
        )
        .unwrap();
        assert_eq!(req.offer_details.and_then(|o| o.salary), Some(85_000));

        let bare: GenerateResponseRequest =
            serde_json::from_str(r#"{"message": "Still thinking?"}"#).unwrap();
        assert!(bare.offer_details.is_none());
    }

    #[test]
    fn test_update_strategy_rejects_unknown_value() {
        let result: Result<UpdateStrategyRequest, _> =
            serde_json::from_str(r#"{"strategy": "aggressive_yelling"}"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_strategy_listing_covers_all_variants() {
        let Json(list) = handle_list_strategies().await;
        assert_eq!(list.len(), 4);
        assert!(list.iter().any(|s| s.value == "confident_assertive"));
        assert!(list
            .iter()
            .any(|s| s.name == "Professional Passive Aggressive"));
    }
}
